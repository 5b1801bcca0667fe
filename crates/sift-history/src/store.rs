//! The capped, newest-first history sequence.

use chrono::{DateTime, Utc};
use sift_core::entities::{AnalysisInput, AnalysisResult, HistoryRecord};
use sift_core::ids::next_record_id;

use crate::error::HistoryError;
use crate::slot::SlotStore;

/// Maximum number of records kept.
pub const HISTORY_CAPACITY: usize = 10;

/// Confidence is a percentage; loaded values above this are clamped.
const MAX_CONFIDENCE: u8 = 100;

/// Slot name used by default.
pub const DEFAULT_SLOT: &str = sift_core::ids::DEFAULT_SLOT_NAME;

/// Outcome of a mutating store operation.
///
/// The in-memory mutation always happens; `persisted` reports whether the
/// slot rewrite that followed it succeeded.
#[derive(Debug)]
#[must_use = "slot write failures are only reported through `persisted`"]
pub struct StoreWrite<T> {
    pub value: T,
    pub persisted: Result<(), HistoryError>,
}

impl<T> StoreWrite<T> {
    /// Collapse into a plain result, surfacing any persistence failure.
    ///
    /// # Errors
    ///
    /// Returns the `HistoryError` raised while rewriting the slot.
    pub fn into_result(self) -> Result<T, HistoryError> {
        let Self { value, persisted } = self;
        persisted.map(|()| value)
    }

    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.persisted.is_ok()
    }
}

/// Owns the history sequence and keeps its slot in sync.
///
/// Records are ordered newest first and never exceed [`HISTORY_CAPACITY`].
/// Every mutation rewrites the whole slot.
#[derive(Debug)]
pub struct HistoryStore<S> {
    slots: S,
    slot: String,
    records: Vec<HistoryRecord>,
}

impl<S: SlotStore> HistoryStore<S> {
    /// Rehydrate from `slot`. Never fails: a missing, unreadable, or corrupt
    /// slot yields an empty history.
    #[must_use]
    pub fn load(slots: S, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        let records = match slots.read(&slot) {
            Ok(Some(raw)) => parse_slot(&slot, &raw),
            Ok(None) => Vec::new(),
            Err(error) => {
                tracing::warn!(%slot, %error, "history slot unreadable; starting empty");
                Vec::new()
            }
        };

        tracing::debug!(%slot, records = records.len(), "loaded history");
        Self {
            slots,
            slot,
            records,
        }
    }

    /// Records, newest first.
    #[must_use]
    pub fn list(&self) -> &[HistoryRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&HistoryRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    #[must_use]
    pub const fn slots(&self) -> &S {
        &self.slots
    }

    /// Record an analysis, timestamped now.
    pub fn append(
        &mut self,
        input: &AnalysisInput,
        result: &AnalysisResult,
    ) -> StoreWrite<HistoryRecord> {
        self.append_at(input, result, Utc::now())
    }

    /// Record an analysis with an explicit creation time.
    pub fn append_at(
        &mut self,
        input: &AnalysisInput,
        result: &AnalysisResult,
        now: DateTime<Utc>,
    ) -> StoreWrite<HistoryRecord> {
        let newest = self.records.iter().map(|record| record.id).max();
        let record = HistoryRecord::new(next_record_id(now, newest), input, result, now);

        self.records.insert(0, record.clone());
        self.records.truncate(HISTORY_CAPACITY);

        tracing::debug!(id = record.id, verdict = %record.verdict, "appended history record");
        StoreWrite {
            value: record,
            persisted: self.persist(),
        }
    }

    /// Remove the record with `id`, if present. A missing id is a no-op, but
    /// the slot is still rewritten.
    pub fn remove(&mut self, id: i64) -> StoreWrite<Option<HistoryRecord>> {
        let removed = self
            .records
            .iter()
            .position(|record| record.id == id)
            .map(|index| self.records.remove(index));

        tracing::debug!(id, removed = removed.is_some(), "removed history record");
        StoreWrite {
            value: removed,
            persisted: self.persist(),
        }
    }

    /// Drop every record. Returns how many were dropped.
    pub fn clear(&mut self) -> StoreWrite<usize> {
        let cleared = self.records.len();
        self.records.clear();
        StoreWrite {
            value: cleared,
            persisted: self.persist(),
        }
    }

    fn persist(&mut self) -> Result<(), HistoryError> {
        let encoded = serde_json::to_string(&self.records)?;
        self.slots.write(&self.slot, &encoded).map_err(|source| {
            tracing::warn!(slot = %self.slot, error = %source, "history slot write failed");
            HistoryError::PersistenceUnavailable {
                slot: self.slot.clone(),
                source,
            }
        })
    }
}

fn parse_slot(slot: &str, raw: &str) -> Vec<HistoryRecord> {
    match serde_json::from_str::<Option<Vec<HistoryRecord>>>(raw) {
        Ok(records) => {
            let mut records = records.unwrap_or_default();
            if records.len() > HISTORY_CAPACITY {
                tracing::warn!(
                    %slot,
                    found = records.len(),
                    "history slot over capacity; truncating"
                );
                records.truncate(HISTORY_CAPACITY);
            }
            for record in &mut records {
                if record.confidence > MAX_CONFIDENCE {
                    tracing::warn!(
                        %slot,
                        id = record.id,
                        confidence = record.confidence,
                        "history record confidence out of range; clamping"
                    );
                    record.confidence = MAX_CONFIDENCE;
                }
            }
            records
        }
        Err(error) => {
            tracing::warn!(%slot, %error, "history slot is corrupt; starting empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use sift_core::enums::Verdict;

    use super::*;
    use crate::error::PersistenceError;
    use crate::slot::MemorySlotStore;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).single().unwrap()
    }

    fn input(n: usize) -> AnalysisInput {
        AnalysisInput::new(format!("title {n}"), format!("content {n}"), "")
    }

    fn store() -> HistoryStore<MemorySlotStore> {
        HistoryStore::load(MemorySlotStore::new(), DEFAULT_SLOT)
    }

    fn seeded(raw: impl Into<String>) -> HistoryStore<MemorySlotStore> {
        HistoryStore::load(
            MemorySlotStore::new().with_slot(DEFAULT_SLOT, raw),
            DEFAULT_SLOT,
        )
    }

    fn ids(store: &HistoryStore<MemorySlotStore>) -> Vec<i64> {
        store.list().iter().map(|record| record.id).collect()
    }

    #[test]
    fn append_prepends_and_persists() {
        let mut store = store();
        let first = input(1);
        let result = sift_analyzer::analyze_input(&first);

        let written = store.append_at(&first, &result, at(1_000));
        assert!(written.is_persisted());
        let record = written.into_result().unwrap();

        assert_eq!(record.id, 1_000);
        assert_eq!(record.title, "title 1");
        assert_eq!(record.verdict, result.verdict);
        assert_eq!(store.list(), std::slice::from_ref(&record));

        let raw = store.slots().get(DEFAULT_SLOT).expect("slot written");
        let persisted: Vec<HistoryRecord> = serde_json::from_str(raw).unwrap();
        assert_eq!(persisted, vec![record]);
    }

    #[test]
    fn caps_at_ten_newest_first() {
        let mut store = store();
        for n in 0..13 {
            let item = input(n);
            let result = sift_analyzer::analyze_input(&item);
            let _ = store.append_at(&item, &result, at(1_000 + i64::try_from(n).unwrap()));
            assert!(store.len() <= HISTORY_CAPACITY);
        }

        assert_eq!(store.len(), HISTORY_CAPACITY);
        assert_eq!(ids(&store), (1_003..=1_012).rev().collect::<Vec<_>>());
        assert_eq!(store.list()[0].title, "title 12");
        assert_eq!(store.list()[9].title, "title 3");
    }

    #[test]
    fn same_millisecond_appends_get_distinct_ids() {
        let mut store = store();
        let item = input(0);
        let result = sift_analyzer::analyze_input(&item);
        for _ in 0..3 {
            let _ = store.append_at(&item, &result, at(5_000));
        }
        assert_eq!(ids(&store), vec![5_002, 5_001, 5_000]);
    }

    #[test]
    fn remove_deletes_matching_record() {
        let mut store = store();
        for n in 0..3 {
            let item = input(n);
            let result = sift_analyzer::analyze_input(&item);
            let _ = store.append_at(&item, &result, at(100 + i64::try_from(n).unwrap()));
        }

        let removed = store.remove(101).into_result().unwrap();
        assert_eq!(removed.map(|record| record.title), Some("title 1".to_string()));
        assert_eq!(ids(&store), vec![102, 100]);

        let raw = store.slots().get(DEFAULT_SLOT).unwrap();
        let persisted: Vec<HistoryRecord> = serde_json::from_str(raw).unwrap();
        assert_eq!(persisted.len(), 2);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut store = store();
        let item = input(0);
        let result = sift_analyzer::analyze_input(&item);
        let _ = store.append_at(&item, &result, at(100));
        let before = store.list().to_vec();

        let written = store.remove(999);
        assert!(written.is_persisted());
        assert!(written.value.is_none());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn clear_empties_the_slot() {
        let mut store = store();
        let item = input(0);
        let result = sift_analyzer::analyze_input(&item);
        let _ = store.append_at(&item, &result, at(100));
        let _ = store.append_at(&item, &result, at(200));

        assert_eq!(store.clear().into_result().unwrap(), 2);
        assert!(store.is_empty());
        assert_eq!(store.slots().get(DEFAULT_SLOT), Some("[]"));
    }

    #[test]
    fn failed_write_keeps_memory_and_surfaces_error() {
        let mut slots = MemorySlotStore::new();
        slots.set_fail_writes(true);
        let mut store = HistoryStore::load(slots, DEFAULT_SLOT);
        let item = input(0);
        let result = sift_analyzer::analyze_input(&item);

        let written = store.append_at(&item, &result, at(100));
        assert_eq!(written.value.id, 100);
        assert!(matches!(
            written.persisted,
            Err(HistoryError::PersistenceUnavailable {
                source: PersistenceError::Unavailable(_),
                ..
            })
        ));
        assert_eq!(store.len(), 1);
        assert!(store.slots().get(DEFAULT_SLOT).is_none());
    }

    #[test]
    fn load_reads_existing_slot() {
        let raw = r#"[{"id":2,"title":"b","content":"y","source":"bbc.com","verdict":"real","confidence":100,"createdAt":"2026-02-08T12:00:00Z"},
                     {"id":1,"title":"a","content":"x","source":"","result":"fake","confidence":58,"date":"2026-02-08T11:00:00.000Z"}]"#;
        let store = seeded(raw);

        assert_eq!(ids(&store), vec![2, 1]);
        assert_eq!(store.get(1).map(|record| record.verdict), Some(Verdict::Fake));
        assert!(store.get(3).is_none());
    }

    #[test]
    fn next_id_follows_loaded_records() {
        let raw = r#"[{"id":9000,"title":"","content":"","verdict":"real","confidence":0,"createdAt":"2026-02-08T12:00:00Z"}]"#;
        let mut store = seeded(raw);
        let item = input(0);
        let result = sift_analyzer::analyze_input(&item);

        let record = store.append_at(&item, &result, at(10)).value;
        assert_eq!(record.id, 9001);
    }

    #[rstest::rstest]
    #[case("not json")]
    #[case("{\"id\":1}")]
    #[case("[{\"id\":\"x\"}]")]
    #[case("")]
    fn corrupt_slot_loads_empty(#[case] raw: &str) {
        let store = seeded(raw);
        assert!(store.is_empty());
    }

    #[test]
    fn out_of_range_confidence_is_clamped_on_load() {
        let raw = r#"[
            {"id":2,"title":"a","content":"x","source":"","verdict":"fake","confidence":250,"createdAt":"2026-02-08T12:00:00.000Z"},
            {"id":1,"title":"b","content":"y","source":"","verdict":"real","confidence":100,"createdAt":"2026-02-08T11:00:00.000Z"}
        ]"#;
        let store = seeded(raw);

        let confidences = store
            .list()
            .iter()
            .map(|record| record.confidence)
            .collect::<Vec<_>>();
        assert_eq!(confidences, vec![100, 100]);
    }

    #[test]
    fn null_slot_loads_empty() {
        let store = seeded("null");
        assert!(store.is_empty());
    }

    #[test]
    fn oversized_slot_is_truncated_on_load() {
        let records: Vec<String> = (0..12)
            .rev()
            .map(|id| {
                format!(
                    r#"{{"id":{id},"title":"","content":"","verdict":"uncertain","confidence":0,"createdAt":"2026-02-08T12:00:00Z"}}"#
                )
            })
            .collect();
        let raw = format!("[{}]", records.join(","));
        let store = seeded(raw);

        assert_eq!(store.len(), HISTORY_CAPACITY);
        assert_eq!(store.list()[0].id, 11);
    }
}
