//! Mood palette

use std::fmt;
use std::str::FromStr;

/// The fixed set of moods an entry can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Sunny,
    Cloudy,
    Rainy,
    Growing,
    Inspired,
    Calm,
    Active,
    Tired,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Sunny,
        Mood::Cloudy,
        Mood::Rainy,
        Mood::Growing,
        Mood::Inspired,
        Mood::Calm,
        Mood::Active,
        Mood::Tired,
    ];

    /// The emoji persisted on entries
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Sunny => "☀️",
            Mood::Cloudy => "☁️",
            Mood::Rainy => "🌧️",
            Mood::Growing => "🌱",
            Mood::Inspired => "✨",
            Mood::Calm => "🍵",
            Mood::Active => "🔥",
            Mood::Tired => "🌚",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Sunny => "Sunny",
            Mood::Cloudy => "Cloudy",
            Mood::Rainy => "Rainy",
            Mood::Growing => "Growing",
            Mood::Inspired => "Inspired",
            Mood::Calm => "Calm",
            Mood::Active => "Active",
            Mood::Tired => "Tired",
        }
    }

    /// Look up a stored emoji, ignoring emoji variation selectors
    pub fn from_emoji(emoji: &str) -> Option<Mood> {
        let bare = strip_variation(emoji);
        Self::ALL
            .into_iter()
            .find(|mood| strip_variation(mood.emoji()) == bare)
    }
}

fn strip_variation(s: &str) -> String {
    s.chars().filter(|c| *c != '\u{FE0F}').collect()
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(mood) = Self::from_emoji(trimmed) {
            return Ok(mood);
        }
        Self::ALL
            .into_iter()
            .find(|mood| mood.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("Invalid mood: {}", s))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}
