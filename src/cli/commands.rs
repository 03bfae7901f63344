//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chronolog")]
#[command(about = "One diary page per calendar day, one entry per year", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Day to show (e.g., today, yesterday, 07-04, 2022-07-04)
    #[arg(value_name = "DAY")]
    pub day: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new diary
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show every year's entry for a day, newest first
    Show {
        /// Day to show
        #[arg(default_value = "today")]
        day: String,
    },

    /// Write the entry for a day and year
    Write {
        /// Day to write (e.g., today, 07-04, 2022-07-04)
        day: String,

        /// Entry text
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,

        /// Year of the entry (default: year of DAY, or the latest free year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Mood label or emoji (see `chronolog moods`)
        #[arg(short, long)]
        mood: Option<String>,

        /// Remove the mood from the entry
        #[arg(long, conflicts_with = "mood")]
        no_mood: bool,
    },

    /// Move an entry to a different year
    Move {
        /// Day of the entry
        day: String,

        /// Year the entry is currently filed under
        #[arg(long)]
        from: i32,

        /// Year to file the entry under
        #[arg(long)]
        to: i32,

        /// Replace an existing entry in the target year
        #[arg(short, long)]
        force: bool,
    },

    /// Delete the entry for a day and year
    Delete {
        /// Day of the entry
        day: String,

        /// Year of the entry (default: year of DAY)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Show how many entries each day of a month has
    Calendar {
        /// Month number 1-12 (default: current month)
        month: Option<u32>,
    },

    /// Reflect on a day's entries across years
    Insight {
        /// Day to reflect on
        #[arg(default_value = "today")]
        day: String,
    },

    /// List the available moods
    Moods,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
