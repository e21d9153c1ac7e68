//! Stencil CLI
//!
//! Tokenizes a template and prints the resulting nodes, for debugging lint
//! rules and the tokenizer itself.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use stencil_common::warning::clear_warnings;
use stencil_html::{Node, TemplateLanguage, TokenizeIssue, Tokenizer, print_nodes, reconstruct};

/// Stencil: tokenize HTML templates with embedded interpolations
#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the node tree of a view
    stencil app/views/users/show.html.erb

    # Tokenize an inline template
    stencil --html '<div class="<%= css %>">'

    # Lodash template as JSON
    stencil --language lodash --json templates/row.html

    # Check that tokenization reproduces the file
    stencil --check app/views/layouts/application.html.erb
"#)]
struct Cli {
    /// Path to the template file
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Tokenize this string instead of a file
    #[arg(long, value_name = "TEMPLATE")]
    html: Option<String>,

    /// Template language: html (erb), javascript (js) or lodash
    #[arg(short, long, default_value = "html")]
    language: String,

    /// Print nodes as JSON
    #[arg(short, long)]
    json: bool,

    /// Verify that the nodes reproduce the input exactly
    #[arg(long)]
    check: bool,

    /// Print tokenizer issues to stderr as they are found
    #[arg(short, long)]
    warnings: bool,
}

/// Load the template from CLI arguments
fn load_template(cli: &Cli) -> Result<String> {
    if let Some(ref template) = cli.html {
        Ok(template.clone())
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("reading '{}'", path.display()))
    } else {
        bail!("no input: pass a FILE or --html")
    }
}

fn print_tree(nodes: &[Node], language: TemplateLanguage) {
    println!(
        "{} {} ({language})",
        "===".bold(),
        format!("{} nodes", nodes.len()).bold()
    );
    print_nodes(nodes);
}

fn print_issues(issues: &[TokenizeIssue]) {
    if issues.is_empty() {
        return;
    }
    println!("{}", format!("=== {} issues", issues.len()).yellow().bold());
    for issue in issues {
        println!("  {}", issue.message.yellow());
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let language: TemplateLanguage = cli.language.parse()?;
    let template = load_template(&cli)?;

    clear_warnings();
    let (nodes, issues) = Tokenizer::new(&template, language)
        .with_warnings(cli.warnings)
        .run_with_issues();

    if cli.check {
        print_issues(&issues);
        if reconstruct(&nodes) == template {
            println!("{} {} nodes reproduce the input", "ok".green().bold(), nodes.len());
            return Ok(ExitCode::SUCCESS);
        }
        eprintln!("{} reconstruction differs from the input", "error".red().bold());
        return Ok(ExitCode::FAILURE);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&nodes)?);
    } else {
        print_tree(&nodes, language);
        print_issues(&issues);
    }
    Ok(ExitCode::SUCCESS)
}
