mod clear;
mod get;
mod list;
mod reanalyze;
mod remove;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HistoryCommands;
use crate::context::AppContext;

/// Handle `sift history`.
pub fn handle(
    action: &HistoryCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HistoryCommands::List => list::run(ctx, flags),
        HistoryCommands::Get { id } => get::run(*id, ctx, flags),
        HistoryCommands::Remove { id } => remove::run(*id, ctx, flags),
        HistoryCommands::Reanalyze { id, save } => reanalyze::run(*id, *save, ctx, flags),
        HistoryCommands::Clear => clear::run(ctx, flags),
    }
}
