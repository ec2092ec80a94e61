//! Direct free-slot search on explicit busy intervals.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Subcommand;
use slotwise_core::{BusyList, Config, OverlapRule, WorkingWindow};

#[derive(Subcommand)]
pub enum SlotAction {
    /// Find the earliest free slot
    Find {
        /// Slot duration in minutes (default: configured value)
        #[arg(long)]
        duration: Option<u32>,
        /// Scan step in minutes (default: configured value)
        #[arg(long)]
        step: Option<u32>,
        /// Busy intervals as a JSON array of {start, end} pairs
        #[arg(long)]
        busy: Option<String>,
        /// Read busy intervals from a JSON file instead
        #[arg(long, conflicts_with = "busy")]
        busy_file: Option<PathBuf>,
        /// Day to search, YYYY-MM-DD (default: today in the configured timezone)
        #[arg(long)]
        date: Option<String>,
        /// Override the window start, RFC 3339
        #[arg(long, requires = "window_end")]
        window_start: Option<String>,
        /// Override the window end, RFC 3339
        #[arg(long, requires = "window_start")]
        window_end: Option<String>,
        /// Use the endpoint-only overlap test instead of the strict one
        #[arg(long)]
        legacy_overlap: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SlotAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SlotAction::Find {
            duration,
            step,
            busy,
            busy_file,
            date,
            window_start,
            window_end,
            legacy_overlap,
            json,
        } => {
            let config = Config::load_or_default();

            let busy_list: BusyList = if let Some(inline) = busy {
                serde_json::from_str(&inline)?
            } else if let Some(path) = busy_file {
                serde_json::from_str(&std::fs::read_to_string(path)?)?
            } else {
                Vec::new()
            };

            let window = match (window_start, window_end) {
                (Some(start), Some(end)) => {
                    let start: DateTime<Utc> = start.parse()?;
                    let end: DateTime<Utc> = end.parse()?;
                    WorkingWindow::new(start, end)?
                }
                _ => {
                    let day = super::resolve_date(date, &config)?;
                    config.working_window(day)?
                }
            };

            let duration = duration.unwrap_or(config.slot.duration_minutes);
            let mut finder = config.slot_finder();
            if let Some(step) = step {
                finder = finder.with_step(step);
            }
            if legacy_overlap {
                finder = finder.with_rule(OverlapRule::Legacy);
            }

            let result = finder.find(&busy_list, duration, &window)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                match result.found() {
                    Some(slot) => println!(
                        "free slot: {} - {}",
                        slot.start().to_rfc3339(),
                        slot.end().to_rfc3339()
                    ),
                    None => println!("no slot available"),
                }
            }
        }
    }
    Ok(())
}
