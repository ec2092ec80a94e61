//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Working hours and local timezone
//! - Default slot duration, scan step, and overlap rule
//!
//! Configuration is stored at `~/.config/slotwise/config.toml`.

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::interval::WorkingWindow;
use crate::slot::{OverlapRule, SlotFinder, SlotRequest};

/// Working-hours configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursConfig {
    /// Window opens at this local wall-clock time (HH:MM).
    #[serde(default = "default_open")]
    pub open: String,
    /// Window closes at this local wall-clock time (HH:MM).
    #[serde(default = "default_close")]
    pub close: String,
    /// IANA timezone name the hours are expressed in.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

/// Slot search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotConfig {
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    #[serde(default = "default_step")]
    pub step_minutes: u32,
    #[serde(default)]
    pub rule: OverlapRule,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/slotwise/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub hours: HoursConfig,
    #[serde(default)]
    pub slot: SlotConfig,
}

// Default functions
fn default_open() -> String {
    "09:00".to_string()
}
fn default_close() -> String {
    "18:00".to_string()
}
fn default_timezone() -> String {
    "Asia/Kolkata".to_string()
}
fn default_duration() -> u32 {
    60
}
fn default_step() -> u32 {
    15
}

impl Default for HoursConfig {
    fn default() -> Self {
        Self {
            open: default_open(),
            close: default_close(),
            timezone: default_timezone(),
        }
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            duration_minutes: default_duration(),
            step_minutes: default_step(),
            rule: OverlapRule::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hours: HoursConfig::default(),
            slot: SlotConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: "config key is empty".to_string(),
            });
        }

        let unknown = || ConfigError::InvalidValue {
            key: key.to_string(),
            message: "unknown config key".to_string(),
        };

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value.parse::<bool>().map_err(|e| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: e.to_string(),
                        })?,
                    ),
                    serde_json::Value::Number(_) => {
                        let n = value.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: format!("cannot parse '{value}' as number"),
                        })?;
                        serde_json::Value::Number(n.into())
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist. Returns error if the key is
    /// unknown or the value cannot be parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        self.save()?;
        Ok(())
    }

    /// The configured IANA timezone.
    ///
    /// # Errors
    ///
    /// Returns an error if `hours.timezone` is not a known zone name.
    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.hours
            .timezone
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: "hours.timezone".to_string(),
                message: format!("unknown timezone '{}'", self.hours.timezone),
            })
    }

    /// The working window for a local date, resolved to UTC.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured hours or timezone are invalid,
    /// or if a bound does not resolve on that date.
    pub fn working_window(&self, date: NaiveDate) -> Result<WorkingWindow> {
        let tz = self.timezone()?;
        let open = parse_wall_clock("hours.open", &self.hours.open)?;
        let close = parse_wall_clock("hours.close", &self.hours.close)?;
        Ok(WorkingWindow::for_local_day(date, tz, open, close)?)
    }

    /// Default slot request from config.
    pub fn slot_request(&self) -> SlotRequest {
        SlotRequest {
            duration_minutes: self.slot.duration_minutes,
            step_minutes: self.slot.step_minutes,
        }
    }

    /// Slot finder configured with the stored step and overlap rule.
    pub fn slot_finder(&self) -> SlotFinder {
        SlotFinder::new()
            .with_step(self.slot.step_minutes)
            .with_rule(self.slot.rule)
    }
}

fn parse_wall_clock(key: &str, value: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("'{value}' is not a HH:MM time"),
    })
}
