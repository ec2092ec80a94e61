pub mod config;
pub mod plan;
pub mod slot;

use chrono::{NaiveDate, Utc};
use slotwise_core::Config;

/// Resolve `--date` to a local date: parse it if given, otherwise use
/// today in the configured timezone.
pub fn resolve_date(
    date: Option<String>,
    config: &Config,
) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(s) => Ok(NaiveDate::parse_from_str(&s, "%Y-%m-%d")?),
        None => {
            let tz = config.timezone()?;
            Ok(Utc::now().with_timezone(&tz).date_naive())
        }
    }
}
