use anyhow::Context;
use sift_core::responses::HistoryClearResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let cleared = ctx
        .history
        .clear()
        .into_result()
        .context("failed to persist cleared history")?;

    output(
        &HistoryClearResponse {
            cleared: u32::try_from(cleared)?,
        },
        flags.format,
    )
}
