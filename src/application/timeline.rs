//! Day timeline use case

use crate::domain::DiaryEntry;
use crate::infrastructure::{BlobStore, DiaryStore};
use std::collections::HashSet;

/// Reads the entries of one calendar day across years
pub struct TimelineService<'a, B: BlobStore> {
    store: &'a DiaryStore<B>,
}

impl<'a, B: BlobStore> TimelineService<'a, B> {
    pub fn new(store: &'a DiaryStore<B>) -> Self {
        TimelineService { store }
    }

    /// Entries for the day, most recent year first
    pub fn day(&self, month: u32, day: u32) -> Vec<DiaryEntry> {
        self.store.get_entries_for_day(month, day)
    }

    /// The latest year not later than `current_year` that has no entry yet
    pub fn suggest_year(&self, month: u32, day: u32, current_year: i32) -> i32 {
        let taken: HashSet<i32> = self.day(month, day).iter().map(|e| e.year).collect();

        let mut year = current_year;
        while taken.contains(&year) {
            year -= 1;
        }
        year
    }
}
