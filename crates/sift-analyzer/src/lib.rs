//! # sift-analyzer
//!
//! Heuristic credibility scoring for news articles.
//!
//! Scoring is a pure, total function: every input (including empty strings)
//! yields a result, and identical inputs yield identical results.
//!
//! 1. Extract [`Signals`](sift_core::entities::Signals) from content and source
//!    ([`signals::collect`]).
//! 2. Weight and clamp them to a `0..=100` score ([`score`]).
//! 3. Classify the score and derive confidence.
//! 4. Explain the verdict with ordered factors ([`factors::explain`]).
//!
//! ```
//! use sift_core::enums::Verdict;
//!
//! let result = sift_analyzer::analyze("", "SHOCKING hoax! Doctors hate this miracle cure!", "");
//! assert_eq!(result.verdict, Verdict::Fake);
//! ```

pub mod factors;
pub mod lexicon;
pub mod score;
pub mod signals;

use sift_core::entities::{AnalysisInput, AnalysisResult};

/// Score an article. The title is recorded in logs but carries no signal.
#[must_use]
pub fn analyze(title: &str, content: &str, source: &str) -> AnalysisResult {
    let signals = signals::collect(content, source);
    let score = score::clamp_score(score::raw_score(&signals));
    let verdict = score::classify(score);
    let confidence = score::confidence(score);
    let factors = factors::explain(verdict, &signals);

    tracing::debug!(
        title,
        score,
        %verdict,
        confidence,
        keywords = signals.keyword_hits.len(),
        exclamations = signals.exclamation_count,
        all_caps_runs = signals.all_caps_runs,
        source = %signals.source,
        "analyzed article"
    );

    AnalysisResult {
        verdict,
        confidence,
        factors,
        score,
        signals,
    }
}

/// Convenience wrapper over [`analyze`].
#[must_use]
pub fn analyze_input(input: &AnalysisInput) -> AnalysisResult {
    analyze(&input.title, &input.content, &input.source)
}
