//! Tokenizer warnings with colored terminal output.
//!
//! Warnings are deduplicated so that a template full of the same unterminated
//! construct does not flood the terminal. The tokenizer only routes issues here
//! when a caller opts in; library consumers normally read issues as values.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Record a warning key, returning `true` the first time it is seen.
fn record(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about a recoverable condition (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Tokenizer", "unterminated comment at offset 12");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(warning_key(component, message)) {
        eprintln!("{YELLOW}[Stencil {component}] ⚠ {message}{RESET}");
    }
}

/// Whether `warn_once` has already printed this message for `component`.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&warning_key(component, message)))
}

/// Clear all recorded warnings (call before tokenizing a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_message() {
        warn_once("Test", "recorded once");
        assert!(has_warned("Test", "recorded once"));
        assert!(!has_warned("Test", "never sent"));
        assert!(!has_warned("Other", "recorded once"));
    }

    #[test]
    fn test_duplicate_warning_is_not_recorded_twice() {
        assert!(record(warning_key("Dedup", "same message")));
        assert!(!record(warning_key("Dedup", "same message")));
    }
}
