use anyhow::Context;
use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use chrono::format::{Item, StrftimeItems};
use ratatui::style::Color;

/// Default 24-hour clock format
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Default date format, e.g. "Mon, 19 Oct"
pub const DEFAULT_DATE_FORMAT: &str = "%a, %-d %b";

/// Shortest interval a ticker may be configured with
const MIN_INTERVAL_MS: u64 = 1;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub time_format: String,
    pub date_format: String,
    /// Clock screen refresh period in milliseconds
    pub clock_refresh_ms: u64,
    /// Stopwatch tick period in milliseconds
    pub stopwatch_tick_ms: u64,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub start_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub stop_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub dim_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub error_fg: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            clock_refresh_ms: 1000,
            stopwatch_tick_ms: 10,
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            selection_fg: Color::Rgb(255, 165, 0), // Orange
            start_fg: Color::Rgb(48, 209, 88),
            stop_fg: Color::Rgb(255, 69, 58),
            dim_fg: Color::Gray,
            error_fg: Color::Red,
        }
    }
}

impl Config {
    pub fn clock_refresh_interval(&self) -> Duration {
        Duration::from_millis(self.clock_refresh_ms.max(MIN_INTERVAL_MS))
    }

    pub fn stopwatch_tick_interval(&self) -> Duration {
        Duration::from_millis(self.stopwatch_tick_ms.max(MIN_INTERVAL_MS))
    }

    /// Replace unusable strftime patterns with the defaults
    ///
    /// chrono panics when a `Display` of an invalid pattern is formatted,
    /// so patterns are checked once at load time.
    fn sanitize(mut self) -> Self {
        if !is_valid_format(&self.time_format) {
            tracing::warn!("Invalid time_format {:?}, using {:?}", self.time_format, DEFAULT_TIME_FORMAT);
            self.time_format = DEFAULT_TIME_FORMAT.to_string();
        }
        if !is_valid_format(&self.date_format) {
            tracing::warn!("Invalid date_format {:?}, using {:?}", self.date_format, DEFAULT_DATE_FORMAT);
            self.date_format = DEFAULT_DATE_FORMAT.to_string();
        }
        self
    }
}

/// Check that a strftime pattern contains no invalid specifiers
pub fn is_valid_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Serde adapter for `parse_color`
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Parse a colour: anything ratatui's `Color::from_str` takes (names,
/// `#rrggbb`, palette indices), plus "orange", `#rgb` and `r,g,b`
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("orange") {
        return Some(Color::Rgb(255, 165, 0));
    }
    if let Ok(color) = Color::from_str(s) {
        return Some(color);
    }
    match s.strip_prefix('#') {
        Some(hex) => parse_short_hex(hex),
        None => parse_rgb_tuple(s),
    }
}

fn parse_short_hex(hex: &str) -> Option<Color> {
    let channels: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8 * 0x11))
        .collect::<Option<_>>()?;
    match channels[..] {
        [r, g, b] => Some(Color::Rgb(r, g, b)),
        _ => None,
    }
}

fn parse_rgb_tuple(s: &str) -> Option<Color> {
    let channels: Vec<u8> = s
        .split(',')
        .map(|part| part.trim().parse().ok())
        .collect::<Option<_>>()?;
    match channels[..] {
        [r, g, b] => Some(Color::Rgb(r, g, b)),
        _ => None,
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Parse configuration text, sanitizing format patterns
pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(content).map(Config::sanitize)
}

/// Load the config file, falling back to defaults when there is none
///
/// A file that exists but cannot be read or parsed is an error.
pub fn load() -> anyhow::Result<Config> {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Ok(Config::default()),
    };

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
}
