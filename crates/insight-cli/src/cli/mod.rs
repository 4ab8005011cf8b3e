use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{CheckArgs, Commands, SchemaArgs};

/// Top-level CLI parser for the `insight` binary.
#[derive(Debug, Parser)]
#[command(name = "insight", version, about = "Insight record checker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra TOML config file, layered below environment variables
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["insight", "--format", "raw", "--verbose", "check", "a.json"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        let Commands::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.file.as_deref(), Some(Path::new("a.json")));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["insight", "schema", "--quiet", "--config", "x.toml"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert_eq!(cli.global_flags().config.as_deref(), Some(Path::new("x.toml")));
        assert!(matches!(cli.command, Commands::Schema(ref args) if args.name.is_none()));
    }

    #[test]
    fn check_accepts_repeated_kinds() {
        let cli = Cli::try_parse_from([
            "insight", "check", "--strict", "--kind", "track", "-k", "identify",
        ])
        .expect("cli should parse");

        let Commands::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert!(args.strict);
        assert!(args.file.is_none());
        assert_eq!(args.kinds, vec!["track", "identify"]);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["insight", "--format", "table", "schema"]);
        assert!(parsed.is_err());
    }
}
