#![forbid(unsafe_code)]

//! mermaid-gate CLI - validate AI-generated Mermaid diagram text.
//!
//! # Commands
//!
//! - `validate`: Check diagram text against one dialect's rule set
//! - `rules`: List a dialect's rules in evaluation order

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mg_core::Dialect;
use mg_validate::{rules_for, validate};
use serde::Serialize;
use tracing::debug;

/// mermaid-gate CLI - validate AI-generated Mermaid diagram text.
#[derive(Debug, Parser)]
#[command(
    name = "mg-cli",
    version,
    about = "mermaid-gate CLI - validate AI-generated Mermaid diagram text",
    long_about = "A validation gate for AI-generated Mermaid diagrams.\n\n\
        Checks flowchart, mindmap, and sequence-diagram text for structural\n\
        validity before it is handed to a renderer."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging (can be repeated for more detail: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate diagram text against one dialect's rule set.
    Validate {
        /// Dialect to validate against
        #[arg(short, long, value_enum)]
        dialect: DialectArg,

        /// Input file path or "-" for stdin. If omitted, reads from stdin.
        #[arg(default_value = "-")]
        input: String,

        /// Output as JSON (structured verdict)
        #[arg(long)]
        json: bool,
    },

    /// List a dialect's rules in evaluation order.
    Rules {
        /// Dialect to list. All dialects if omitted.
        #[arg(short, long, value_enum)]
        dialect: Option<DialectArg>,
    },
}

/// Dialect selector for command-line arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum DialectArg {
    Flowchart,
    Mindmap,
    Sequence,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Flowchart => Self::Flowchart,
            DialectArg::Mindmap => Self::Mindmap,
            DialectArg::Sequence => Self::Sequence,
        }
    }
}

/// Verdict of validating one input.
#[derive(Debug, Serialize)]
struct ValidateReport {
    valid: bool,
    dialect: String,
    code: Option<String>,
    reason: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Validate {
            dialect,
            input,
            json,
        } => cmd_validate(dialect.into(), &input, json),

        Command::Rules { dialect } => cmd_rules(dialect.map(Into::into)),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .try_init();
}

fn load_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else if Path::new(input).exists() {
        std::fs::read_to_string(input).context(format!("Failed to read file: {input}"))
    } else {
        // Treat as inline diagram text
        Ok(input.to_string())
    }
}

// =============================================================================
// Command: validate
// =============================================================================

fn cmd_validate(dialect: Dialect, input: &str, json_output: bool) -> Result<()> {
    let source = load_input(input)?;
    debug!(
        "validating {} bytes as {}",
        source.len(),
        dialect.as_str()
    );

    let verdict = validate(dialect, &source);
    let report = ValidateReport {
        valid: verdict.is_ok(),
        dialect: dialect.as_str().to_string(),
        code: verdict.as_ref().err().map(|v| v.code().to_string()),
        reason: verdict.as_ref().err().map(ToString::to_string),
    };

    if json_output {
        let output = serde_json::to_string_pretty(&report)?;
        println!("{output}");
    } else if report.valid {
        println!("✓ Valid {} diagram", report.dialect);
    } else {
        println!("✗ Invalid {} diagram", report.dialect);
        if let (Some(code), Some(reason)) = (&report.code, &report.reason) {
            println!("  [{code}] {reason}");
        }
    }

    if !report.valid {
        std::process::exit(1);
    }

    Ok(())
}

// =============================================================================
// Command: rules
// =============================================================================

fn cmd_rules(dialect: Option<Dialect>) -> Result<()> {
    let dialects = dialect.map_or_else(|| Dialect::ALL.to_vec(), |chosen| vec![chosen]);

    for dialect in dialects {
        println!("{}:", dialect.as_str());
        for (index, rule) in rules_for(dialect).iter().enumerate() {
            println!("  {}. {}", index + 1, rule.name);
        }
    }

    Ok(())
}
