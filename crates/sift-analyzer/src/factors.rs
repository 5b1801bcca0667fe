//! Verdict-dependent explanatory factors.

use sift_core::entities::{Factor, Signals};
use sift_core::enums::{FactorKind, SourceCredibility, Verdict};

/// More exclamation marks than this earns its own factor.
pub const EXCLAMATION_FACTOR_THRESHOLD: u32 = 3;
/// More all-caps runs than this earns its own factor.
pub const ALL_CAPS_FACTOR_THRESHOLD: u32 = 2;

/// Build the ordered factor list for a verdict. Never empty.
#[must_use]
pub fn explain(verdict: Verdict, signals: &Signals) -> Vec<Factor> {
    let kinds = match verdict {
        Verdict::Fake => fake_factors(signals),
        Verdict::Real => real_factors(signals),
        Verdict::Uncertain => vec![FactorKind::MixedSignals],
    };
    kinds.into_iter().map(Factor::from).collect()
}

fn fake_factors(signals: &Signals) -> Vec<FactorKind> {
    let mut kinds = vec![FactorKind::SensationalLanguage];
    if signals.exclamation_count > EXCLAMATION_FACTOR_THRESHOLD {
        kinds.push(FactorKind::ExcessiveExclamation);
    }
    if signals.all_caps_runs > ALL_CAPS_FACTOR_THRESHOLD {
        kinds.push(FactorKind::ExcessiveCapitalization);
    }
    if signals.source == SourceCredibility::Unrecognized {
        kinds.push(FactorKind::UnrecognizedSource);
    }
    if !signals.has_direct_citation {
        kinds.push(FactorKind::MissingCitations);
    }
    kinds
}

fn real_factors(signals: &Signals) -> Vec<FactorKind> {
    let mut kinds = vec![FactorKind::CredibleAppearance];
    if signals.source == SourceCredibility::Recognized {
        kinds.push(FactorKind::RecognizedSource);
    }
    if signals.has_direct_citation {
        kinds.push(FactorKind::HasCitations);
    }
    kinds
}
