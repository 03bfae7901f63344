//! chronolog - A diary with one page per calendar day
//!
//! Every calendar day (month and day) collects one entry per year, so the
//! same day can be read across years. Entries live in a single JSON blob
//! indexed by `MM-DD` and then by year.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ChronologError;
