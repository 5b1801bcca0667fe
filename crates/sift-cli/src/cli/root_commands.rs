use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::HistoryCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Score an article as real, fake, or uncertain.
    Analyze(AnalyzeArgs),
    /// Saved analyses (last ten).
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Print the JSON Schema of a persisted or emitted type.
    Schema(SchemaArgs),
    /// Print the effective configuration.
    Config(ConfigArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Article headline.
    #[arg(long, default_value = "")]
    pub title: String,
    /// Article body. Read from stdin when neither this nor --content-file is given.
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,
    /// Read the article body from a file (`-` for stdin).
    #[arg(long)]
    pub content_file: Option<PathBuf>,
    /// Where the article was published (URL or domain).
    #[arg(long, default_value = "")]
    pub source: String,
    /// Save the result to history.
    #[arg(long)]
    pub save: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaTarget {
    /// One history record.
    Record,
    /// The whole history slot (array of records).
    Slot,
    /// An analysis result.
    Result,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub target: SchemaTarget,
}

#[derive(Clone, Debug, Args)]
pub struct ConfigArgs {
    /// Print as TOML instead of the selected output format.
    #[arg(long)]
    pub toml: bool,
}
