use anyhow::Context;
use sift_core::entities::AnalysisInput;
use sift_core::responses::AnalyzeResponse;
use sift_history::{HistoryError, HistoryStore, SlotStore};

use crate::cli::GlobalFlags;
use crate::output::{output_report, report};

/// A scored article plus the outcome of saving it.
pub struct Analysis {
    pub response: AnalyzeResponse,
    pub save_error: Option<HistoryError>,
}

/// Score `input` once and, when `save` is set, store that same result.
pub fn analyze_and_save<S: SlotStore>(
    input: AnalysisInput,
    save: bool,
    history: &mut HistoryStore<S>,
) -> Analysis {
    let result = sift_analyzer::analyze_input(&input);

    let (saved, save_error) = if save {
        let write = history.append(&input, &result);
        match write.persisted {
            Ok(()) => (Some(write.value), None),
            Err(error) => (None, Some(error)),
        }
    } else {
        (None, None)
    };

    Analysis {
        response: AnalyzeResponse {
            input,
            result,
            saved,
        },
        save_error,
    }
}

/// Print the analysis, then report a failed save as the command error.
pub fn emit(analysis: Analysis, flags: &GlobalFlags) -> anyhow::Result<()> {
    output_report(&analysis.response, flags.format, report::analysis)?;
    match analysis.save_error {
        Some(error) => Err(error).context("analysis was not saved to history"),
        None => Ok(()),
    }
}
