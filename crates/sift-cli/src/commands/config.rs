use serde::Serialize;
use sift_config::SiftConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ConfigArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ConfigResponse<'a> {
    /// Directory the history slot actually lives in, after overrides.
    history_dir: String,
    config: &'a SiftConfig,
}

/// Handle `sift config`.
pub fn handle(args: &ConfigArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.toml {
        print!("{}", toml::to_string_pretty(&ctx.config)?);
        return Ok(());
    }

    output(
        &ConfigResponse {
            history_dir: ctx.history.slots().dir().display().to_string(),
            config: &ctx.config,
        },
        flags.format,
    )
}
