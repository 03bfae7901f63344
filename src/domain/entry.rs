//! Diary entry model

use crate::domain::DateKey;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One year's journal record for a calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: String,
    #[serde(rename = "dayMonth")]
    pub date_key: DateKey,
    pub year: i32,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Epoch milliseconds of the last write; 0 until first persisted
    #[serde(default)]
    pub last_edited: i64,
}

impl DiaryEntry {
    /// Create a blank, unsaved entry with a fresh identifier
    pub fn new(date_key: DateKey, year: i32) -> Self {
        DiaryEntry {
            id: Uuid::new_v4().to_string(),
            date_key,
            year,
            content: String::new(),
            mood: None,
            last_edited: 0,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.last_edited != 0
    }

    /// Stamp the entry with the current time
    pub fn touch(&mut self) {
        self.last_edited = Utc::now().timestamp_millis();
    }
}
