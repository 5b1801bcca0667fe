use anyhow::Context;
use sift_core::responses::HistoryRemoveResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: i64, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let removed = ctx
        .history
        .remove(id)
        .into_result()
        .context("failed to persist history after remove")?;

    output(
        &HistoryRemoveResponse {
            id,
            removed: removed.is_some(),
            remaining: u32::try_from(ctx.history.len())?,
        },
        flags.format,
    )
}
