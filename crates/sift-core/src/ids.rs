//! History record ID allocation and slot-name rules.
//!
//! IDs are millisecond timestamps, bumped past the newest ID already held so
//! two records created within the same millisecond (or after a clock step
//! backwards) still get distinct, strictly increasing IDs.

use chrono::{DateTime, Utc};

/// Slot the history lives in unless configured otherwise. Shared with the
/// web front end's history.
pub const DEFAULT_SLOT_NAME: &str = "analysisHistory";

/// Allocate the next record ID.
///
/// `newest` is the largest ID currently held by the store, if any.
#[must_use]
pub fn next_record_id(now: DateTime<Utc>, newest: Option<i64>) -> i64 {
    let candidate = now.timestamp_millis();
    match newest {
        Some(last) if last >= candidate => last.saturating_add(1),
        _ => candidate,
    }
}

/// Slot names are restricted to `[A-Za-z0-9_-]+` so they map safely onto
/// file names and other backend keys.
#[must_use]
pub fn is_valid_slot_name(slot: &str) -> bool {
    !slot.is_empty()
        && slot
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_'))
}
