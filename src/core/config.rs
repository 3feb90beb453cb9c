//! Environment-driven bot configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Surgery date and reminder time as the only domain settings

use anyhow::{Context as _, Result};
use chrono::{NaiveDate, NaiveTime};
use std::time::Duration;

pub const DEFAULT_SURGERY_DATE: &str = "2025-07-08";
pub const DEFAULT_REMINDER_TIME: &str = "09:00";
pub const DEFAULT_REMINDER_POLL_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub discord_guild_id: Option<u64>,
    pub surgery_date: NaiveDate,
    pub reminder_time: NaiveTime,
    pub reminder_poll_interval: Duration,
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("DISCORD_TOKEN must be set"))?;

        let discord_guild_id = match lookup("DISCORD_GUILD_ID").filter(|g| !g.trim().is_empty()) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("Invalid DISCORD_GUILD_ID '{raw}'"))?,
            ),
            None => None,
        };

        let surgery_date_raw =
            lookup("SURGERY_DATE").unwrap_or_else(|| DEFAULT_SURGERY_DATE.to_string());
        let surgery_date = parse_date(&surgery_date_raw)
            .with_context(|| format!("Invalid SURGERY_DATE '{surgery_date_raw}'"))?;

        let reminder_time_raw =
            lookup("REMINDER_TIME").unwrap_or_else(|| DEFAULT_REMINDER_TIME.to_string());
        let reminder_time = parse_time(&reminder_time_raw)
            .with_context(|| format!("Invalid REMINDER_TIME '{reminder_time_raw}'"))?;

        let poll_secs = match lookup("REMINDER_POLL_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid REMINDER_POLL_SECS '{raw}'"))?,
            None => DEFAULT_REMINDER_POLL_SECS,
        };
        if poll_secs == 0 {
            anyhow::bail!("REMINDER_POLL_SECS must be greater than zero");
        }

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            discord_token,
            discord_guild_id,
            surgery_date,
            reminder_time,
            reminder_poll_interval: Duration::from_secs(poll_secs),
            log_level,
        })
    }
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?)
}

/// Parse an `HH:MM` (or `HH:MM:SS`) wall-clock time
pub fn parse_time(raw: &str) -> Result<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(Into::into)
}
