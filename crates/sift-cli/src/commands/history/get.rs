use sift_core::errors::CoreError;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output_report, report};

pub fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx
        .history
        .get(id)
        .ok_or_else(|| CoreError::record_not_found(id))?;
    output_report(record, flags.format, report::record)
}
