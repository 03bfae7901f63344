//! Write, move and delete entry use cases

use crate::domain::{DateKey, DiaryEntry, Mood};
use crate::error::{ChronologError, Result};
use crate::infrastructure::{BlobStore, DiaryStore};

/// What a write does to the mood of the entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoodChange {
    /// Leave the stored mood as it is
    #[default]
    Keep,
    Set(Mood),
    Clear,
}

/// Service for editing the entries of a calendar day
pub struct WriteEntryService<'a, B: BlobStore> {
    store: &'a DiaryStore<B>,
}

impl<'a, B: BlobStore> WriteEntryService<'a, B> {
    pub fn new(store: &'a DiaryStore<B>) -> Self {
        WriteEntryService { store }
    }

    /// Write the content of the entry for `(month, day, year)`.
    ///
    /// An existing entry keeps its id, and its mood under `MoodChange::Keep`.
    pub fn write(
        &self,
        month: u32,
        day: u32,
        year: i32,
        content: &str,
        mood: MoodChange,
    ) -> DiaryEntry {
        let mut entry = self
            .store
            .get_entry(month, day, year)
            .unwrap_or_else(|| DiaryEntry::new(DateKey::new(month, day), year));

        entry.content = content.to_string();
        match mood {
            MoodChange::Keep => {}
            MoodChange::Set(mood) => entry.mood = Some(mood.emoji().to_string()),
            MoodChange::Clear => entry.mood = None,
        }
        entry.touch();

        self.store.save_entry(&entry);
        entry
    }

    /// Re-file an entry under a different year.
    ///
    /// The old slot is deleted before the new one is written so no stale
    /// duplicate survives. An occupied target is only replaced with `force`.
    pub fn move_year(
        &self,
        month: u32,
        day: u32,
        from: i32,
        to: i32,
        force: bool,
    ) -> Result<DiaryEntry> {
        let key = DateKey::new(month, day);
        let mut entry = self
            .store
            .get_entry(month, day, from)
            .ok_or_else(|| ChronologError::EntryNotFound(format!("{} in {}", key, from)))?;

        if from == to {
            return Ok(entry);
        }

        if !force && self.store.get_entry(month, day, to).is_some() {
            return Err(ChronologError::EntryConflict(format!("{} in {}", key, to)));
        }

        self.store.delete_entry(month, day, from);

        entry.year = to;
        entry.touch();
        self.store.save_entry(&entry);

        log::info!("Moved entry {} on {} from {} to {}", entry.id, key, from, to);
        Ok(entry)
    }

    /// Delete the entry for `(month, day, year)`, returning whether it existed
    pub fn delete(&self, month: u32, day: u32, year: i32) -> bool {
        let existed = self.store.get_entry(month, day, year).is_some();
        self.store.delete_entry(month, day, year);
        existed
    }
}
