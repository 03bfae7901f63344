//! Domain layer - Business logic and domain models

pub mod database;
pub mod date_key;
pub mod day_ref;
pub mod entry;
pub mod mood;
pub mod prompts;

pub use database::DiaryDatabase;
pub use date_key::DateKey;
pub use day_ref::{DayReference, ResolvedDay};
pub use entry::DiaryEntry;
pub use mood::Mood;
pub use prompts::{random_prompt, INSPIRATION_PROMPTS};
