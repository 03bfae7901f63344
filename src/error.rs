//! Error types for chronolog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for chronolog application
#[derive(Debug, Error)]
pub enum ChronologError {
    #[error("Not a chronolog directory: {0}")]
    NotChronologDirectory(PathBuf),

    #[error("Invalid day reference: {0}")]
    InvalidDayReference(String),

    #[error("No entry for {0}")]
    EntryNotFound(String),

    #[error("An entry already exists for {0}")]
    EntryConflict(String),

    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("API key is missing. Please provide a valid API key.")]
    MissingApiKey,

    #[error("Insight request failed: {0}")]
    Insight(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ChronologError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ChronologError::NotChronologDirectory(_) => 2,
            ChronologError::InvalidDayReference(_) => 3,
            ChronologError::EntryNotFound(_) => 4,
            ChronologError::EntryConflict(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ChronologError::NotChronologDirectory(path) => {
                format!(
                    "Not a chronolog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'chronolog init' in this directory to create a new diary\n\
                    • Navigate to an existing chronolog directory\n\
                    • Set CHRONOLOG_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            ChronologError::InvalidDayReference(day_str) => {
                format!(
                    "Invalid day reference: '{}'\n\n\
                    Valid day references:\n\
                    • today, yesterday, tomorrow\n\
                    • Calendar days: MM-DD (e.g., 07-04)\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2022-07-04)\n\n\
                    Examples:\n\
                    chronolog show today\n\
                    chronolog show 07-04",
                    day_str
                )
            }
            ChronologError::EntryNotFound(what) => {
                format!(
                    "No entry for {}\n\n\
                    Suggestions:\n\
                    • Use 'chronolog show <DAY>' to see which years have entries",
                    what
                )
            }
            ChronologError::EntryConflict(what) => {
                format!(
                    "An entry already exists for {}\n\n\
                    Suggestions:\n\
                    • Pass --force to replace the existing entry\n\
                    • Pick a different target year",
                    what
                )
            }
            ChronologError::InvalidMood(mood) => {
                format!(
                    "Invalid mood: '{}'\n\n\
                    Use 'chronolog moods' to list the available moods",
                    mood
                )
            }
            ChronologError::MissingApiKey => {
                "API key is missing. Please provide a valid API key.\n\n\
                Suggestions:\n\
                • Set the GEMINI_API_KEY environment variable\n\
                • Configure it: chronolog config api_key <KEY>"
                    .to_string()
            }
            ChronologError::Config(msg) => {
                if msg.contains("Invalid month") {
                    format!(
                        "{}\n\n\
                        Months are numbered 1 to 12\n\
                        Example: chronolog calendar 3",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ChronologError
pub type Result<T> = std::result::Result<T, ChronologError>;
