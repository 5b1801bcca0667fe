use std::io::IsTerminal;

use sift_core::entities::AnalysisInput;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::commands::shared::analysis::{analyze_and_save, emit};
use crate::commands::shared::input::read_content;
use crate::context::AppContext;

/// Handle `sift analyze`.
pub fn handle(args: &AnalyzeArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let is_terminal = stdin.is_terminal();
    let content = read_content(
        args.content.as_deref(),
        args.content_file.as_deref(),
        &mut stdin.lock(),
        is_terminal,
    )?;

    let input = AnalysisInput::new(&args.title, content, &args.source);
    let save = args.save || ctx.config.general.auto_save;
    emit(analyze_and_save(input, save, &mut ctx.history), flags)
}
