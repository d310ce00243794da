//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Mailforge command-line interface for managing email templates
#[derive(Parser)]
#[command(name = "mailforge-cli")]
#[command(author, version, about = "Mailforge command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the template store API
    #[arg(long, global = true, env = "MAILFORGE_API_URL", default_value = "http://localhost:8080/api")]
    pub api_url: String,

    /// Bearer token attached to every API request
    #[arg(long, global = true, env = "MAILFORGE_API_TOKEN")]
    pub token: Option<String>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List all templates
    #[command(about = "List templates, optionally filtered")]
    List {
        /// Output format for the template list
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,

        /// Free-text filter over name, subject, and tags (case-insensitive)
        #[arg(long)]
        filter: Option<String>,

        /// Require a tag; may be given multiple times, all must match
        #[arg(long)]
        tag: Vec<String>,
    },

    /// Show the full record for a template
    #[command(about = "Show a template including design and version history")]
    Show {
        /// Template id
        id: String,
    },

    /// Create or update a template
    #[command(about = "Save a template; creates when --id is absent")]
    Save {
        /// Display name
        #[arg(long)]
        name: String,

        /// Email subject line
        #[arg(long)]
        subject: String,

        /// Path to a JSON file with the design payload; empty design if omitted
        #[arg(long)]
        design: Option<PathBuf>,

        /// Tag to assign; may be given multiple times
        #[arg(long)]
        tag: Vec<String>,

        /// Existing template id to update instead of creating
        #[arg(long)]
        id: Option<String>,
    },

    /// Update meta fields without touching the design
    #[command(about = "Patch name, subject, or tags of a template")]
    Update {
        /// Template id
        id: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New subject line
        #[arg(long)]
        subject: Option<String>,

        /// Replacement tag; may be given multiple times
        #[arg(long)]
        tag: Vec<String>,

        /// Remove all tags
        #[arg(long, conflicts_with = "tag")]
        clear_tags: bool,
    },

    /// Delete a template
    #[command(about = "Delete a template by id")]
    Delete {
        /// Template id
        id: String,
    },

    /// Duplicate a template into a fresh id
    #[command(about = "Clone a template; the copy starts with no version history")]
    Duplicate {
        /// Source template id
        id: String,
    },

    /// Send a test email for a template
    #[command(about = "Trigger a backend-side test send")]
    SendTest {
        /// Template id
        id: String,

        /// Recipient address
        email: String,
    },
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table
    Table,
    /// Pretty-printed JSON
    Json,
}
