//! Indicator extraction: turns raw text into [`Signals`] tallies.

use sift_core::entities::Signals;
use sift_core::enums::SourceCredibility;

use crate::lexicon::{
    CITATION_PHRASES, CREDIBLE_DOMAINS, DIRECT_CITATION_PHRASES, SENSATIONAL_KEYWORDS,
};

/// Minimum length of an uppercase run that counts as shouting.
const ALL_CAPS_MIN_RUN: usize = 3;

/// Gather every indicator the scorer weighs.
#[must_use]
pub fn collect(content: &str, source: &str) -> Signals {
    let lower = content.to_lowercase();

    Signals {
        keyword_hits: keyword_hits(&lower),
        exclamation_count: saturating_u32(content.matches('!').count()),
        all_caps_runs: count_all_caps_runs(content),
        source: source_credibility(source),
        has_citation: contains_any(&lower, &CITATION_PHRASES),
        has_direct_citation: contains_any(&lower, &DIRECT_CITATION_PHRASES),
        char_count: content.encode_utf16().count(),
    }
}

fn keyword_hits(lower: &str) -> Vec<String> {
    SENSATIONAL_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .map(|keyword| (*keyword).to_string())
        .collect()
}

/// Count maximal runs of at least three consecutive ASCII uppercase letters.
///
/// Equivalent to the number of non-overlapping matches of `[A-Z]{3,}`.
#[must_use]
pub fn count_all_caps_runs(content: &str) -> u32 {
    let mut runs = 0u32;
    let mut current = 0usize;

    for ch in content.chars() {
        if ch.is_ascii_uppercase() {
            current += 1;
        } else {
            if current >= ALL_CAPS_MIN_RUN {
                runs = runs.saturating_add(1);
            }
            current = 0;
        }
    }
    if current >= ALL_CAPS_MIN_RUN {
        runs = runs.saturating_add(1);
    }

    runs
}

/// Classify a free-form source string against the credible domain list.
#[must_use]
pub fn source_credibility(source: &str) -> SourceCredibility {
    if source.is_empty() {
        SourceCredibility::Absent
    } else if CREDIBLE_DOMAINS.iter().any(|domain| source.contains(domain)) {
        SourceCredibility::Recognized
    } else {
        SourceCredibility::Unrecognized
    }
}

fn contains_any(lower: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| lower.contains(phrase))
}

fn saturating_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
