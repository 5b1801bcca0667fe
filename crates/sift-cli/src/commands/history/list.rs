use sift_core::responses::HistoryListResponse;
use sift_history::{HistoryStore, SlotStore};

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{output_report, report};

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let response = list_response(&ctx.history, usize::try_from(limit)?)?;
    output_report(&response, flags.format, report::history)
}

fn list_response<S: SlotStore>(
    history: &HistoryStore<S>,
    limit: usize,
) -> anyhow::Result<HistoryListResponse> {
    Ok(HistoryListResponse {
        records: history.list().iter().take(limit).cloned().collect(),
        total: u32::try_from(history.len())?,
    })
}
