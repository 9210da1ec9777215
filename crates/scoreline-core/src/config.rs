//! Configuration types for scoreline.
//!
//! [`Config::load`] layers `scoreline.toml` (or an explicit file) on top of the
//! built-in defaults. [`Config::defaults`] returns the same defaults without
//! touching the filesystem (useful in tests).
//!
//! The defaults reproduce the constants of the 2020-03-25 event log: a +2 hour
//! timezone correction, a 09:00 start and `12344` marking placeholder teams.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[event]
date                  = "2020-03-25"
timezone_offset_hours = 2.0
start_hour            = 9.0

[report]
log_path               = "log.txt"
output_dir             = "plots"
exclude_team_substring = "12344"

[chart]
width        = 1024
height       = 768
caption_size = 28
"#;

/// File picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "scoreline.toml";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub event: EventConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

/// `[event]` section: how log timestamps map onto hours since the start.
#[derive(Debug, Clone, Deserialize)]
pub struct EventConfig {
    /// Only lines stamped with this date are recognised.
    #[serde(default = "default_date")]
    pub date: NaiveDate,
    /// Added to the logged hour to get local time.
    #[serde(default = "default_timezone_offset_hours")]
    pub timezone_offset_hours: f64,
    /// Local hour the competition started; subtracted from every timestamp.
    #[serde(default = "default_start_hour")]
    pub start_hour: f64,
}

fn default_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 3, 25).unwrap_or_default()
}
fn default_timezone_offset_hours() -> f64 { 2.0 }
fn default_start_hour() -> f64 { 9.0 }

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            date: default_date(),
            timezone_offset_hours: default_timezone_offset_hours(),
            start_hour: default_start_hour(),
        }
    }
}

/// `[report]` section: where to read from and write to.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Teams whose identifier contains this are left out of the report.
    #[serde(default = "default_exclude_team_substring")]
    pub exclude_team_substring: String,
}

fn default_log_path() -> PathBuf { PathBuf::from("log.txt") }
fn default_output_dir() -> PathBuf { PathBuf::from("plots") }
fn default_exclude_team_substring() -> String { "12344".to_string() }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            output_dir: default_output_dir(),
            exclude_team_substring: default_exclude_team_substring(),
        }
    }
}

/// `[chart]` section: image geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_caption_size")]
    pub caption_size: u32,
}

fn default_width() -> u32 { 1024 }
fn default_height() -> u32 { 768 }
fn default_caption_size() -> u32 { 28 }

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            caption_size: default_caption_size(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration layered on top of the built-in defaults.
    ///
    /// With `Some(path)` the file must exist. With `None`,
    /// [`DEFAULT_CONFIG_FILE`] in the working directory is used if present.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let user_file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(user_file)
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
