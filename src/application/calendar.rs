//! Month calendar use case

use crate::error::{ChronologError, Result};
use crate::infrastructure::{BlobStore, DiaryStore};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Calendar days are laid out on a leap year so February shows the 29th
const LAYOUT_YEAR: i32 = 2024;

/// One month of the year-independent calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub month: u32,
    pub name: String,
    pub days: u32,
    /// Entry count per day, only for days that have entries
    pub counts: HashMap<u32, usize>,
}

impl MonthView {
    pub fn count_for(&self, day: u32) -> usize {
        self.counts.get(&day).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

pub struct CalendarService<'a, B: BlobStore> {
    store: &'a DiaryStore<B>,
}

impl<'a, B: BlobStore> CalendarService<'a, B> {
    pub fn new(store: &'a DiaryStore<B>) -> Self {
        CalendarService { store }
    }

    pub fn month(&self, month: u32) -> Result<MonthView> {
        let first = NaiveDate::from_ymd_opt(LAYOUT_YEAR, month, 1)
            .ok_or_else(|| ChronologError::Config(format!("Invalid month: {}", month)))?;

        Ok(MonthView {
            month,
            name: first.format("%B").to_string(),
            days: days_in_month(month),
            counts: self.store.get_entry_counts_for_month(month),
        })
    }
}

/// Month after `month`, wrapping December to January
pub fn next_month(month: u32) -> u32 {
    if month >= 12 {
        1
    } else {
        month + 1
    }
}

/// Month before `month`, wrapping January to December
pub fn previous_month(month: u32) -> u32 {
    if month <= 1 {
        12
    } else {
        month - 1
    }
}

fn days_in_month(month: u32) -> u32 {
    let (year, next) = if month == 12 {
        (LAYOUT_YEAR + 1, 1)
    } else {
        (LAYOUT_YEAR, month + 1)
    };
    NaiveDate::from_ymd_opt(year, next, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}
