//! Common utilities for the Stencil tokenizer.
//!
//! This crate provides shared infrastructure used by the tokenizer and the CLI:
//! - **Warning System** - colored terminal output for recoverable tokenizer issues
//! - **Errors** - configuration errors surfaced before tokenization begins

pub mod error;
pub mod warning;

pub use error::ConfigError;
