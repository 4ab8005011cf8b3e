use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Check whether a JSON document is an insight.
    Check(CheckArgs),
    /// Print a registered JSON Schema, or list schema names.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// JSON file to check (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,

    /// Reject fields other than `type`, `event`, and `data`
    #[arg(long)]
    pub strict: bool,

    /// Allowed `type` tag (repeatable; adds to the configured list)
    #[arg(short, long = "kind", value_name = "TAG")]
    pub kinds: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (lists available names when omitted)
    pub name: Option<String>,
}
