use chrono::{Datelike, Local};
use chronolog::application::insight::{has_enough_material, NOT_ENOUGH_ENTRIES};
use chronolog::application::{
    CalendarService, ConfigService, InitService, InsightService, MoodChange, TimelineService,
    WriteEntryService,
};
use chronolog::cli::{format_day, format_month, format_moods, Cli, Commands};
use chronolog::domain::{random_prompt, DateKey, DayReference, Mood, ResolvedDay};
use chronolog::error::{ChronologError, Result};
use chronolog::infrastructure::{DiaryRepository, FileSystemRepository, GeminiClient};
use clap::Parser;
use std::str::FromStr;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn resolve_day(day: &str) -> Result<ResolvedDay> {
    Ok(DayReference::parse(day)?.resolve(Local::now().date_naive()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path }) => {
            InitService::execute(&path)?;
            println!("Initialized chronolog diary at {}", path.display());
            Ok(())
        }
        Some(Commands::Show { day }) => show(&day),
        Some(Commands::Write {
            day,
            content,
            year,
            mood,
            no_mood,
        }) => {
            let resolved = resolve_day(&day)?;
            let mood = match mood {
                Some(m) => MoodChange::Set(
                    Mood::from_str(&m).map_err(|_| ChronologError::InvalidMood(m))?,
                ),
                None if no_mood => MoodChange::Clear,
                None => MoodChange::Keep,
            };

            let repo = FileSystemRepository::discover()?;
            let store = repo.open_store();

            let year = match year.or(resolved.year) {
                Some(year) => year,
                None => TimelineService::new(&store).suggest_year(
                    resolved.month,
                    resolved.day,
                    Local::now().year(),
                ),
            };

            let entry = WriteEntryService::new(&store).write(
                resolved.month,
                resolved.day,
                year,
                &content.join(" "),
                mood,
            );
            println!("Saved {} {}", entry.date_key, entry.year);
            Ok(())
        }
        Some(Commands::Move {
            day,
            from,
            to,
            force,
        }) => {
            let resolved = resolve_day(&day)?;
            let repo = FileSystemRepository::discover()?;
            let store = repo.open_store();

            let entry = WriteEntryService::new(&store).move_year(
                resolved.month,
                resolved.day,
                from,
                to,
                force,
            )?;
            println!("Moved {} from {} to {}", entry.date_key, from, entry.year);
            Ok(())
        }
        Some(Commands::Delete { day, year }) => {
            let resolved = resolve_day(&day)?;
            let year = year.or(resolved.year).ok_or_else(|| {
                ChronologError::Config(format!(
                    "No year given for {}. Use --year or a YYYY-MM-DD date",
                    day
                ))
            })?;

            let repo = FileSystemRepository::discover()?;
            let store = repo.open_store();
            let key = DateKey::new(resolved.month, resolved.day);

            if WriteEntryService::new(&store).delete(resolved.month, resolved.day, year) {
                println!("Deleted {} {}", key, year);
                Ok(())
            } else {
                Err(ChronologError::EntryNotFound(format!("{} in {}", key, year)))
            }
        }
        Some(Commands::Calendar { month }) => {
            let month = month.unwrap_or_else(|| Local::now().month());
            let repo = FileSystemRepository::discover()?;
            let store = repo.open_store();

            let view = CalendarService::new(&store).month(month)?;
            print!("{}", format_month(&view));
            Ok(())
        }
        Some(Commands::Insight { day }) => {
            let resolved = resolve_day(&day)?;
            let repo = FileSystemRepository::discover()?;
            let store = repo.open_store();
            let key = DateKey::new(resolved.month, resolved.day);

            let entries = TimelineService::new(&store).day(resolved.month, resolved.day);
            if entries.len() < 2 {
                println!("{}", NOT_ENOUGH_ENTRIES);
                return Ok(());
            }
            if !has_enough_material(&entries) {
                eprintln!("Note: these entries are short, the reflection may be thin");
            }

            let config = repo.load_config()?;
            let client = GeminiClient::from_config(&config)?;
            let insight = InsightService::new(&client).generate(key.as_str(), &entries);
            println!("{}", insight);
            Ok(())
        }
        Some(Commands::Moods) => {
            print!("{}", format_moods());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("model = {}", config.model);
                println!("endpoint = {}", config.endpoint);
                println!("api_key = {}", service.get("api_key")?);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {}", k);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: chronolog config [--list | <key> [<value>]]");
                println!("Valid keys: model, endpoint, api_key");
                Ok(())
            }
        }
        None => match cli.day {
            Some(day) => show(&day),
            None => show("today"),
        },
    }
}

fn show(day: &str) -> Result<()> {
    let resolved = resolve_day(day)?;
    let repo = FileSystemRepository::discover()?;
    let store = repo.open_store();

    let entries = TimelineService::new(&store).day(resolved.month, resolved.day);
    let key = DateKey::new(resolved.month, resolved.day);
    print!("{}", format_day(key.as_str(), &entries, random_prompt()));
    Ok(())
}
