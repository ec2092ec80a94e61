//! Calendar-backed day planning commands.

use std::path::PathBuf;

use clap::Subcommand;
use slotwise_core::{CalendarSource, Config, DayPlanner, JsonCalendar, StaticCalendar};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Find the earliest free slot of the day
    Day {
        /// Day to plan, YYYY-MM-DD (default: today in the configured timezone)
        #[arg(long)]
        date: Option<String>,
        /// JSON calendar export to read events from (default: empty calendar)
        #[arg(long)]
        busy_file: Option<PathBuf>,
        /// Slot duration in minutes (default: configured value)
        #[arg(long)]
        duration: Option<u32>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Suggest a slot for a named task or appointment
    Suggest {
        /// Task or appointment title
        title: String,
        /// Day to plan, YYYY-MM-DD (default: today in the configured timezone)
        #[arg(long)]
        date: Option<String>,
        /// JSON calendar export to read events from (default: empty calendar)
        #[arg(long)]
        busy_file: Option<PathBuf>,
        /// Slot duration in minutes (default: configured value)
        #[arg(long)]
        duration: Option<u32>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn load_source(
    busy_file: Option<PathBuf>,
) -> Result<Box<dyn CalendarSource>, Box<dyn std::error::Error>> {
    match busy_file {
        Some(path) => Ok(Box::new(JsonCalendar::load(path)?)),
        None => Ok(Box::new(StaticCalendar::default())),
    }
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Day {
            date,
            busy_file,
            duration,
            json,
        } => {
            let config = Config::load_or_default();
            let day = super::resolve_date(date, &config)?;
            let duration = duration.unwrap_or(config.slot.duration_minutes);

            let source = load_source(busy_file)?;
            let planner = DayPlanner::new(&*source, config);

            let result = planner.plan_day(day, duration)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                match result.found() {
                    Some(slot) => {
                        let tz = planner.timezone()?;
                        println!(
                            "free slot on {day}: {} - {}",
                            slot.start().with_timezone(&tz).format("%I:%M %p"),
                            slot.end().with_timezone(&tz).format("%I:%M %p")
                        );
                    }
                    None => println!("no free slot available on {day}"),
                }
            }
        }
        PlanAction::Suggest {
            title,
            date,
            busy_file,
            duration,
            json,
        } => {
            let config = Config::load_or_default();
            let day = super::resolve_date(date, &config)?;
            let duration = duration.unwrap_or(config.slot.duration_minutes);

            let source = load_source(busy_file)?;
            let planner = DayPlanner::new(&*source, config);

            match planner.suggest(&title, duration, day)? {
                Some(suggestion) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&suggestion)?);
                    } else {
                        let tz = planner.timezone()?;
                        println!(
                            "suggested time for '{}': {}",
                            suggestion.title,
                            suggestion.local_label(tz)
                        );
                    }
                }
                None => {
                    if json {
                        println!("null");
                    } else {
                        println!("no available slot for scheduling");
                    }
                }
            }
        }
    }
    Ok(())
}
