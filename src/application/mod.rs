//! Application layer - Use cases and orchestration

pub mod calendar;
pub mod init;
pub mod insight;
pub mod manage_config;
pub mod timeline;
pub mod write_entry;

pub use calendar::{CalendarService, MonthView};
pub use init::InitService;
pub use insight::InsightService;
pub use manage_config::ConfigService;
pub use timeline::TimelineService;
pub use write_entry::{MoodChange, WriteEntryService};
