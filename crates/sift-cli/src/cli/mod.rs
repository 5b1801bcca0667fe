use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sift` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sift",
    version,
    about = "sift - heuristic fake-news checks with a local history"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Colorize table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Max history rows to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the history slot (overrides storage.dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            limit: self.limit,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::root_commands::SchemaTarget;
    use super::subcommands::HistoryCommands;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "sift",
            "--format",
            "table",
            "--limit",
            "5",
            "--verbose",
            "history",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(5));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::History {
                action: HistoryCommands::List
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sift", "history", "clear", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::History {
                action: HistoryCommands::Clear
            }
        ));
    }

    #[test]
    fn analyze_parses_all_fields() {
        let cli = Cli::try_parse_from([
            "sift",
            "analyze",
            "--title",
            "Moon",
            "--content",
            "BREAKING!!!",
            "--source",
            "reuters.com",
            "--save",
        ])
        .expect("cli should parse");

        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.title, "Moon");
        assert_eq!(args.content.as_deref(), Some("BREAKING!!!"));
        assert_eq!(args.source, "reuters.com");
        assert!(args.save);
    }

    #[test]
    fn analyze_defaults_to_empty_fields() {
        let cli = Cli::try_parse_from(["sift", "analyze"]).expect("cli should parse");
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert!(args.title.is_empty());
        assert!(args.source.is_empty());
        assert!(args.content.is_none());
        assert!(!args.save);
    }

    #[test]
    fn content_and_content_file_conflict() {
        let parsed = Cli::try_parse_from([
            "sift",
            "analyze",
            "--content",
            "x",
            "--content-file",
            "a.txt",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn history_ids_must_be_numeric() {
        assert!(Cli::try_parse_from(["sift", "history", "get", "abc"]).is_err());
        let cli = Cli::try_parse_from(["sift", "history", "reanalyze", "1707393600000", "--save"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::History {
                action: HistoryCommands::Reanalyze {
                    id: 1_707_393_600_000,
                    save: true
                }
            }
        ));
    }

    #[test]
    fn schema_target_parses() {
        let cli = Cli::try_parse_from(["sift", "schema", "slot"]).expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert_eq!(args.target, SchemaTarget::Slot);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["sift", "--format", "xml", "history", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["sift", "--data-dir", "/tmp/sift", "history", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.data_dir.as_deref(), Some("/tmp/sift"));
    }
}
