//! The two-level `MM-DD -> year -> entry` index

use crate::domain::{DateKey, DiaryEntry};
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Entries filed by calendar day, then by year
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DiaryDatabase {
    buckets: BTreeMap<DateKey, BTreeMap<i32, DiaryEntry>>,
}

impl DiaryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a stored database.
    ///
    /// Only malformed JSON is an error. A day bucket or record that is valid
    /// JSON of the wrong shape is skipped with a warning, and the rest of the
    /// database is kept.
    pub fn from_json(raw: &str) -> Result<Self> {
        let days: BTreeMap<DateKey, Value> = serde_json::from_str(raw)?;
        let mut db = DiaryDatabase::new();

        for (key, bucket) in days {
            let records: BTreeMap<String, Value> = match serde_json::from_value(bucket) {
                Ok(records) => records,
                Err(e) => {
                    log::warn!("Skipping unreadable day {}: {}", key, e);
                    continue;
                }
            };

            db.buckets.entry(key.clone()).or_default();
            for (year, record) in records {
                match serde_json::from_value::<DiaryEntry>(record) {
                    Ok(entry) => db.upsert(entry),
                    Err(e) => log::warn!("Skipping unreadable entry {} {}: {}", key, year, e),
                }
            }
        }

        Ok(db)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn get(&self, key: &DateKey, year: i32) -> Option<&DiaryEntry> {
        self.buckets.get(key)?.get(&year)
    }

    /// All entries for a day, most recent year first
    pub fn entries_for_day(&self, key: &DateKey) -> Vec<DiaryEntry> {
        self.buckets
            .get(key)
            .map(|bucket| bucket.values().rev().cloned().collect())
            .unwrap_or_default()
    }

    /// File an entry under its own key and year, replacing whatever was there
    pub fn upsert(&mut self, entry: DiaryEntry) {
        self.buckets
            .entry(entry.date_key.clone())
            .or_default()
            .insert(entry.year, entry);
    }

    /// Remove one entry. Returns whether anything was removed.
    ///
    /// The bucket itself stays in place even when it becomes empty.
    pub fn remove(&mut self, key: &DateKey, year: i32) -> bool {
        self.buckets
            .get_mut(key)
            .is_some_and(|bucket| bucket.remove(&year).is_some())
    }

    /// Day number to entry count for every non-empty day of `month`
    pub fn counts_for_month(&self, month: u32) -> HashMap<u32, usize> {
        self.buckets
            .iter()
            .filter(|(key, _)| key.is_in_month(month))
            .filter_map(|(key, bucket)| {
                let day = key.day()?;
                (!bucket.is_empty()).then_some((day, bucket.len()))
            })
            .collect()
    }
}
