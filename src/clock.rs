use chrono::{DateTime, TimeZone};
use std::fmt::Display;

use crate::config::{Config, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT, is_valid_format};
use crate::time_source::TimeSource;

/// One rendered reading of the wall clock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSample {
    /// e.g. "09:41"
    pub time: String,
    /// e.g. "Mon, 19 Oct"
    pub date: String,
}

impl ClockSample {
    pub fn sample<Tz>(now: &DateTime<Tz>, config: &Config) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            time: format_or_default(now, &config.time_format, DEFAULT_TIME_FORMAT),
            date: format_or_default(now, &config.date_format, DEFAULT_DATE_FORMAT),
        }
    }

    pub fn from_time_source(source: &dyn TimeSource, config: &Config) -> Self {
        Self::sample(&source.now_local(), config)
    }
}

fn format_or_default<Tz>(now: &DateTime<Tz>, pattern: &str, fallback: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let pattern = if is_valid_format(pattern) { pattern } else { fallback };
    now.format(pattern).to_string()
}
