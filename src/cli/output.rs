//! Output formatting utilities

use crate::application::calendar::{next_month, previous_month};
use crate::application::MonthView;
use crate::domain::{DiaryEntry, Mood};

/// Format a day's entries for display
pub fn format_day(date_label: &str, entries: &[DiaryEntry], prompt: &str) -> String {
    if entries.is_empty() {
        return format!("No entries for {} yet\n{}\n", date_label, prompt);
    }

    let mut output = format!("{}\n", date_label);
    for entry in entries {
        output.push('\n');
        match entry.mood.as_deref() {
            Some(mood) => output.push_str(&format!("{}  {}\n", entry.year, mood)),
            None => output.push_str(&format!("{}\n", entry.year)),
        }
        if entry.content.is_empty() {
            output.push_str("    (empty)\n");
        }
        for line in entry.content.lines() {
            output.push_str(&format!("    {}\n", line));
        }
    }
    output
}

/// Format a month as a seven-column grid of days with entry counts
pub fn format_month(view: &MonthView) -> String {
    let mut output = format!("{}\n\n", view.name);

    for day in 1..=view.days {
        let count = view.count_for(day);
        let marker = if count > 0 {
            format!("({})", count)
        } else {
            String::new()
        };
        output.push_str(&format!("{:>3}{:<4}", day, marker));
        if day % 7 == 0 || day == view.days {
            output.push('\n');
        }
    }

    output.push_str(&format!(
        "\n{} entries on {} days\n",
        view.total(),
        view.counts.len()
    ));
    output.push_str(&format!(
        "Previous: chronolog calendar {}  Next: chronolog calendar {}\n",
        previous_month(view.month),
        next_month(view.month)
    ));
    output
}

/// Format the mood palette
pub fn format_moods() -> String {
    let mut output = String::new();
    for mood in Mood::ALL {
        output.push_str(&format!("{}\n", mood));
    }
    output
}
