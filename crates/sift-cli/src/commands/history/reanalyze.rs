use sift_core::errors::CoreError;

use crate::cli::GlobalFlags;
use crate::commands::shared::analysis::{analyze_and_save, emit};
use crate::context::AppContext;

/// Score a saved article again. The saved record itself is never rewritten.
pub fn run(id: i64, save: bool, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = ctx
        .history
        .get(id)
        .ok_or_else(|| CoreError::record_not_found(id))?
        .input();
    emit(analyze_and_save(input, save, &mut ctx.history), flags)
}
