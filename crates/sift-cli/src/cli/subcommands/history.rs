use clap::Subcommand;

/// Saved analysis commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HistoryCommands {
    /// List saved analyses, newest first. Use the global `--limit` to cap rows.
    List,
    /// Show one saved analysis.
    Get { id: i64 },
    /// Delete a saved analysis. Unknown IDs are ignored.
    Remove { id: i64 },
    /// Score a saved article again with the current rules.
    Reanalyze {
        id: i64,
        /// Save the new result as a fresh history entry.
        #[arg(long)]
        save: bool,
    },
    /// Delete every saved analysis.
    Clear,
}
