//! Weighting, clamping, and classification.
//!
//! These weights and cutoffs define the output; changing any of them changes
//! verdicts for previously analyzed articles.

use sift_core::entities::Signals;
use sift_core::enums::{SourceCredibility, Verdict};

pub const KEYWORD_WEIGHT: i32 = 10;
pub const EXCLAMATION_WEIGHT: i32 = 2;
pub const ALL_CAPS_WEIGHT: i32 = 3;
pub const RECOGNIZED_SOURCE_WEIGHT: i32 = -20;
pub const UNRECOGNIZED_SOURCE_WEIGHT: i32 = 10;
pub const MISSING_CITATION_WEIGHT: i32 = 15;
pub const SHORT_CONTENT_WEIGHT: i32 = 10;

/// Content shorter than this many UTF-16 units counts as short.
pub const SHORT_CONTENT_CHARS: usize = 500;

/// Scores strictly below this are `Real`.
pub const REAL_BELOW: u8 = 30;
/// Scores strictly above this are `Fake`.
pub const FAKE_ABOVE: u8 = 70;

const NEUTRAL: u8 = 50;
const MAX_SCORE: i32 = 100;

/// Sum the weighted indicators. May fall outside `0..=100`.
#[must_use]
pub fn raw_score(signals: &Signals) -> i32 {
    let mut score = 0i32;

    score = score.saturating_add(weighted(signals.keyword_hits.len(), KEYWORD_WEIGHT));
    score = score.saturating_add(weighted(signals.exclamation_count, EXCLAMATION_WEIGHT));
    score = score.saturating_add(weighted(signals.all_caps_runs, ALL_CAPS_WEIGHT));

    score = score.saturating_add(match signals.source {
        SourceCredibility::Absent => 0,
        SourceCredibility::Recognized => RECOGNIZED_SOURCE_WEIGHT,
        SourceCredibility::Unrecognized => UNRECOGNIZED_SOURCE_WEIGHT,
    });

    if !signals.has_citation {
        score = score.saturating_add(MISSING_CITATION_WEIGHT);
    }
    if signals.char_count < SHORT_CONTENT_CHARS {
        score = score.saturating_add(SHORT_CONTENT_WEIGHT);
    }

    score
}

#[must_use]
pub fn clamp_score(raw: i32) -> u8 {
    u8::try_from(raw.clamp(0, MAX_SCORE)).unwrap_or(u8::MAX)
}

/// `30..=70` is the uncertain band; both edges are uncertain.
#[must_use]
pub const fn classify(score: u8) -> Verdict {
    if score < REAL_BELOW {
        Verdict::Real
    } else if score > FAKE_ABOVE {
        Verdict::Fake
    } else {
        Verdict::Uncertain
    }
}

/// Distance from the neutral midpoint, doubled onto a percentage scale.
#[must_use]
pub const fn confidence(score: u8) -> u8 {
    score.abs_diff(NEUTRAL).saturating_mul(2)
}

fn weighted<N>(count: N, weight: i32) -> i32
where
    i32: TryFrom<N>,
{
    i32::try_from(count)
        .unwrap_or(i32::MAX)
        .saturating_mul(weight)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, Verdict::Real)]
    #[case(29, Verdict::Real)]
    #[case(30, Verdict::Uncertain)]
    #[case(50, Verdict::Uncertain)]
    #[case(70, Verdict::Uncertain)]
    #[case(71, Verdict::Fake)]
    #[case(100, Verdict::Fake)]
    fn classification_boundaries(#[case] score: u8, #[case] expected: Verdict) {
        assert_eq!(classify(score), expected);
    }

    #[rstest]
    #[case(0, 100)]
    #[case(29, 42)]
    #[case(50, 0)]
    #[case(77, 54)]
    #[case(79, 58)]
    #[case(100, 100)]
    fn confidence_is_doubled_distance(#[case] score: u8, #[case] expected: u8) {
        assert_eq!(confidence(score), expected);
    }

    #[rstest]
    #[case(-45, 0)]
    #[case(0, 0)]
    #[case(64, 64)]
    #[case(100, 100)]
    #[case(135, 100)]
    fn clamps_into_range(#[case] raw: i32, #[case] expected: u8) {
        assert_eq!(clamp_score(raw), expected);
    }

    #[test]
    fn empty_signals_score_short_and_uncited() {
        let signals = Signals {
            keyword_hits: Vec::new(),
            exclamation_count: 0,
            all_caps_runs: 0,
            source: SourceCredibility::Absent,
            has_citation: false,
            has_direct_citation: false,
            char_count: 0,
        };
        assert_eq!(
            raw_score(&signals),
            MISSING_CITATION_WEIGHT + SHORT_CONTENT_WEIGHT
        );
    }
}
