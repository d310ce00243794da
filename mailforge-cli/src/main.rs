//! Mailforge CLI - Command-line interface for the Mailforge template manager
//!
//! Provides commands for listing, showing, saving, updating, deleting,
//! duplicating, and test-sending email templates against a configured
//! template store endpoint.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use clap::Parser;
use cli::Cli;
use mailforge_core::tracing::{TracingLevel, init_tracing};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        let level = match cli.verbose {
            0 => TracingLevel::Warn,
            1 => TracingLevel::Info,
            2 => TracingLevel::Debug,
            _ => TracingLevel::Trace,
        };
        if let Err(e) = init_tracing(level) {
            eprintln!("Warning: {e}");
        }
    }

    let result = commands::dispatch(&cli.api_url, cli.token.as_deref(), cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}
