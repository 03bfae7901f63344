//! Day reference parsing and resolution

use crate::error::{ChronologError, Result};
use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

fn calendar_day_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{1,2})-(\d{1,2})$").unwrap())
}

/// A reference to a calendar day, optionally pinned to a year
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayReference {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Next day
    Tomorrow,
    /// A month and day with no year (MM-DD)
    CalendarDay { month: u32, day: u32 },
    /// Specific date (YYYY-MM-DD)
    SpecificDate(NaiveDate),
}

/// A day reference resolved against a base date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDay {
    pub month: u32,
    pub day: u32,
    /// Year implied by the reference, if any
    pub year: Option<i32>,
}

impl DayReference {
    /// Parse a day reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DayReference::Today),
            "yesterday" => Ok(DayReference::Yesterday),
            "tomorrow" => Ok(DayReference::Tomorrow),
            _ => {
                if let Some(caps) = calendar_day_regex().captures(&normalized) {
                    let month: u32 = caps[1].parse().unwrap_or(0);
                    let day: u32 = caps[2].parse().unwrap_or(0);
                    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
                        return Err(ChronologError::InvalidDayReference(input.to_string()));
                    }
                    return Ok(DayReference::CalendarDay { month, day });
                }

                NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                    .map(DayReference::SpecificDate)
                    .map_err(|_| ChronologError::InvalidDayReference(input.to_string()))
            }
        }
    }

    /// Resolve this reference relative to `base_date`
    pub fn resolve(&self, base_date: NaiveDate) -> ResolvedDay {
        match self {
            DayReference::Today => Self::from_date(base_date),
            DayReference::Yesterday => Self::from_date(base_date - Duration::days(1)),
            DayReference::Tomorrow => Self::from_date(base_date + Duration::days(1)),
            DayReference::CalendarDay { month, day } => ResolvedDay {
                month: *month,
                day: *day,
                year: None,
            },
            DayReference::SpecificDate(date) => Self::from_date(*date),
        }
    }

    fn from_date(date: NaiveDate) -> ResolvedDay {
        ResolvedDay {
            month: date.month(),
            day: date.day(),
            year: Some(date.year()),
        }
    }
}
