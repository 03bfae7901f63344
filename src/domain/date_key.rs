//! Canonical `MM-DD` calendar keys

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar day independent of year, rendered as zero-padded `MM-DD`.
///
/// The key is treated as an opaque string once built: `04-31` is a valid key
/// even though April has 30 days.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Build the key for a month and day, both 1-indexed
    pub fn new(month: u32, day: u32) -> Self {
        DateKey(format!("{:02}-{:02}", month, day))
    }

    /// Build the key for the month and day of a date
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.month(), date.day())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the month half of the key is the zero-padded form of `month`
    pub fn is_in_month(&self, month: u32) -> bool {
        self.0
            .split('-')
            .next()
            .is_some_and(|prefix| prefix == format!("{:02}", month))
    }

    /// Day number encoded in the key
    pub fn day(&self) -> Option<u32> {
        self.0.split('-').nth(1)?.parse().ok()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DateKey {
    fn from(raw: &str) -> Self {
        DateKey(raw.to_string())
    }
}
