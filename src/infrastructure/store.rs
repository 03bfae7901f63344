//! Date-indexed diary storage
//!
//! Every operation reads the whole database from the blob store, and every
//! mutating operation writes the whole database back. Storage failures never
//! reach the caller: a blob that cannot be read or is not valid JSON reads as
//! an empty database, mistyped records inside valid JSON are skipped, and a
//! failed write is logged and dropped.

use crate::domain::{DateKey, DiaryDatabase, DiaryEntry};
use crate::infrastructure::BlobStore;
use std::collections::HashMap;

/// Logical key the database blob is stored under
pub const STORAGE_KEY: &str = "chronolog_data_v1";

/// Durable storage of entries keyed by calendar day and year
#[derive(Debug)]
pub struct DiaryStore<B: BlobStore> {
    blobs: B,
}

impl<B: BlobStore> DiaryStore<B> {
    pub fn new(blobs: B) -> Self {
        DiaryStore { blobs }
    }

    /// The entry for one calendar day in one year
    pub fn get_entry(&self, month: u32, day: u32, year: i32) -> Option<DiaryEntry> {
        let db = self.load();
        db.get(&DateKey::new(month, day), year).cloned()
    }

    /// Every entry for a calendar day, most recent year first
    pub fn get_entries_for_day(&self, month: u32, day: u32) -> Vec<DiaryEntry> {
        self.load().entries_for_day(&DateKey::new(month, day))
    }

    /// File `entry` under its own date key and year, replacing any previous
    /// entry there.
    pub fn save_entry(&self, entry: &DiaryEntry) {
        let mut db = self.load();
        db.upsert(entry.clone());
        self.persist(&db);
    }

    /// Remove the entry for one calendar day in one year. Nothing is written
    /// when there was no such entry.
    pub fn delete_entry(&self, month: u32, day: u32, year: i32) {
        let mut db = self.load();
        if db.remove(&DateKey::new(month, day), year) {
            self.persist(&db);
        } else {
            log::debug!("No entry for {:02}-{:02} in {}, nothing to delete", month, day, year);
        }
    }

    /// Day number to number of entries, for each day of `month` that has any
    pub fn get_entry_counts_for_month(&self, month: u32) -> HashMap<u32, usize> {
        self.load().counts_for_month(month)
    }

    fn load(&self) -> DiaryDatabase {
        let raw = match self.blobs.read(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return DiaryDatabase::new(),
            Err(e) => {
                log::error!("Failed to load diary data: {}", e);
                return DiaryDatabase::new();
            }
        };

        DiaryDatabase::from_json(&raw).unwrap_or_else(|e| {
            log::error!("Failed to load diary data: {}", e);
            DiaryDatabase::new()
        })
    }

    fn persist(&self, db: &DiaryDatabase) {
        let serialized = match db.to_json() {
            Ok(serialized) => serialized,
            Err(e) => {
                log::error!("Failed to save diary data: {}", e);
                return;
            }
        };

        if let Err(e) = self.blobs.write(STORAGE_KEY, &serialized) {
            log::error!("Failed to save diary data: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryBlobStore;

    fn entry(id: &str, month: u32, day: u32, year: i32, content: &str) -> DiaryEntry {
        let mut e = DiaryEntry::new(DateKey::new(month, day), year);
        e.id = id.to_string();
        e.content = content.to_string();
        e
    }

    #[test]
    fn test_get_entry_on_empty_store() {
        let store = DiaryStore::new(MemoryBlobStore::new());
        assert_eq!(store.get_entry(1, 1, 2020), None);
        assert!(store.get_entries_for_day(1, 1).is_empty());
        assert!(store.get_entry_counts_for_month(1).is_empty());
    }

    #[test]
    fn test_save_then_get_round_trip() {
        let store = DiaryStore::new(MemoryBlobStore::new());
        let mut e = entry("a", 7, 4, 2022, "Beach day");
        e.mood = Some("☀️".to_string());
        e.last_edited = 1_700_000_000_000;

        store.save_entry(&e);

        assert_eq!(store.get_entry(7, 4, 2022), Some(e));
    }

    #[test]
    fn test_save_is_idempotent() {
        let blobs = MemoryBlobStore::new();
        let store = DiaryStore::new(&blobs);
        let e = entry("a", 2, 2, 2020, "same");

        store.save_entry(&e);
        let first = blobs.read(STORAGE_KEY).unwrap();
        store.save_entry(&e);
        let second = blobs.read(STORAGE_KEY).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_delete_twice_writes_once() {
        let blobs = MemoryBlobStore::new();
        let store = DiaryStore::new(&blobs);
        store.save_entry(&entry("a", 9, 9, 2021, "x"));
        assert_eq!(blobs.write_count(), 1);

        store.delete_entry(9, 9, 2021);
        assert_eq!(blobs.write_count(), 2);

        store.delete_entry(9, 9, 2021);
        assert_eq!(blobs.write_count(), 2);
        assert_eq!(store.get_entry(9, 9, 2021), None);
    }

    #[test]
    fn test_delete_keeps_empty_bucket_in_blob() {
        let blobs = MemoryBlobStore::new();
        let store = DiaryStore::new(&blobs);
        store.save_entry(&entry("a", 9, 9, 2021, "x"));
        store.delete_entry(9, 9, 2021);

        let raw = blobs.read(STORAGE_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"{"09-09":{}}"#);
        assert!(store.get_entry_counts_for_month(9).is_empty());
    }

    #[test]
    fn test_corrupt_blob_reads_as_empty() {
        let blobs = MemoryBlobStore::new();
        blobs.insert_raw(STORAGE_KEY, "{not json");
        let store = DiaryStore::new(&blobs);

        assert!(store.get_entries_for_day(1, 1).is_empty());

        store.save_entry(&entry("a", 1, 1, 2020, "fresh start"));
        assert_eq!(store.get_entries_for_day(1, 1).len(), 1);
    }

    #[test]
    fn test_mistyped_record_does_not_discard_others() {
        let blobs = MemoryBlobStore::new();
        blobs.insert_raw(
            STORAGE_KEY,
            r#"{"07-04":{"2022":{"id":"a","dayMonth":"07-04","year":2022,"content":"Beach day"}},"01-01":{"2020":{"id":"b","dayMonth":"01-01","year":"2020"}}}"#,
        );
        let store = DiaryStore::new(&blobs);

        assert_eq!(store.get_entries_for_day(7, 4).len(), 1);
        assert!(store.get_entries_for_day(1, 1).is_empty());

        store.save_entry(&entry("c", 3, 3, 2021, "later"));

        assert_eq!(store.get_entry(7, 4, 2022).unwrap().content, "Beach day");
        assert_eq!(store.get_entry(3, 3, 2021).unwrap().id, "c");
    }

    #[test]
    fn test_cleared_blob_reinitializes_on_save() {
        let blobs = MemoryBlobStore::new();
        let store = DiaryStore::new(&blobs);
        store.save_entry(&entry("a", 1, 1, 2020, "before"));

        blobs.remove(STORAGE_KEY);
        assert!(store.get_entries_for_day(1, 1).is_empty());

        store.save_entry(&entry("b", 1, 2, 2021, "after"));
        assert_eq!(store.get_entries_for_day(1, 2)[0].id, "b");
        assert!(store.get_entries_for_day(1, 1).is_empty());
    }

    #[test]
    fn test_failed_write_does_not_panic() {
        let blobs = MemoryBlobStore::new();
        let store = DiaryStore::new(&blobs);
        blobs.set_fail_writes(true);

        store.save_entry(&entry("a", 1, 1, 2020, "lost"));

        assert_eq!(store.get_entry(1, 1, 2020), None);
    }

    #[test]
    fn test_invalid_calendar_day_stored_faithfully() {
        let store = DiaryStore::new(MemoryBlobStore::new());
        store.save_entry(&entry("a", 4, 31, 2020, "odd"));

        assert_eq!(store.get_entry(4, 31, 2020).unwrap().id, "a");
        assert_eq!(store.get_entry_counts_for_month(4).get(&31), Some(&1));
    }
}
