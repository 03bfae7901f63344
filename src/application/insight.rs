//! Cross-year insight use case
//!
//! Failures never escape this module: every outcome is a displayable string.

use crate::domain::DiaryEntry;
use crate::error::ChronologError;
use crate::infrastructure::TextGenerator;

pub const NOT_ENOUGH_ENTRIES: &str =
    "Not enough entries to generate a comparison pattern. Write more to see your growth!";
pub const MISSING_CREDENTIALS: &str =
    "API key is missing. Set GEMINI_API_KEY or run 'chronolog config api_key <KEY>'.";
pub const SERVICE_UNAVAILABLE: &str =
    "The stars are a bit cloudy right now. Please try again later.";
pub const EMPTY_RESPONSE: &str = "I couldn't generate an insight at this moment.";

/// Minimum content length for an entry to count as material for an insight
const MIN_CONTENT_CHARS: usize = 5;

pub struct InsightService<'a, G: TextGenerator> {
    generator: &'a G,
}

impl<'a, G: TextGenerator> InsightService<'a, G> {
    pub fn new(generator: &'a G) -> Self {
        InsightService { generator }
    }

    /// Reflect on the entries of one calendar day across years
    pub fn generate(&self, date_label: &str, entries: &[DiaryEntry]) -> String {
        if entries.len() < 2 {
            return NOT_ENOUGH_ENTRIES.to_string();
        }

        let prompt = build_prompt(date_label, entries);

        match self.generator.generate(&prompt) {
            Ok(text) if text.trim().is_empty() => EMPTY_RESPONSE.to_string(),
            Ok(text) => text.trim().to_string(),
            Err(ChronologError::MissingApiKey) => {
                log::warn!("Insight requested without an API key");
                MISSING_CREDENTIALS.to_string()
            }
            Err(e) => {
                log::error!("Insight generation failed: {}", e);
                SERVICE_UNAVAILABLE.to_string()
            }
        }
    }
}

/// Whether at least two entries have enough written content to compare
pub fn has_enough_material(entries: &[DiaryEntry]) -> bool {
    entries
        .iter()
        .filter(|e| e.content.chars().count() > MIN_CONTENT_CHARS)
        .count()
        >= 2
}

/// Prompt listing the entries oldest year first
pub fn build_prompt(date_label: &str, entries: &[DiaryEntry]) -> String {
    let mut sorted: Vec<&DiaryEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.year);

    let entries_text = sorted
        .iter()
        .map(|e| {
            format!(
                "[{}]: Mood: {} - Content: \"{}\"",
                e.year,
                e.mood.as_deref().unwrap_or("None"),
                e.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a gentle, insightful personal diarist assistant.\n\
        The user is looking at their \"5-Year Diary\" for the date: {date_label}.\n\n\
        Here are their entries from different years on this exact day:\n\
        {entries_text}\n\n\
        Please provide a short, warm, and healing reflection (approx 100-150 words).\n\
        Focus on:\n\
        1. Common themes or recurring emotions on this day.\n\
        2. Signs of growth, maturity, or change in perspective.\n\
        3. A gentle encouragement for the future.\n\n\
        Do not use markdown headers like ##. Just use paragraphs.\n\
        Tone: Soothing, observant, \"Japanese Zakka\" style (simple, mindful)."
    )
}
