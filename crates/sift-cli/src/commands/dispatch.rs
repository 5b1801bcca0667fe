use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => commands::analyze::handle(&args, ctx, flags),
        Commands::History { action } => commands::history::handle(&action, ctx, flags),
        Commands::Config(args) => commands::config::handle(&args, ctx, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
