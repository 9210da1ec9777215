//! Test builders — ergonomic constructors for log lines and submissions.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

#![allow(dead_code)]

use scoreline_core::config::EventConfig;
use scoreline_core::{LogParser, Submission};

// ---------------------------------------------------------------------------
// LogLineBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a judge log line in the event's format.
///
/// # Example
///
/// ```rust
/// let line = LogLineBuilder::new("Rustaceans")
///     .at(10, 15, 0)
///     .file("a_example")
///     .score(1200)
///     .build();
/// ```
pub struct LogLineBuilder {
    date: String,
    time: (u32, u32, u32),
    team: String,
    score: u64,
    input_file: String,
}

impl LogLineBuilder {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            date: "2020-03-25".to_string(),
            time: (7, 0, 0),
            team: team.into(),
            score: 1,
            input_file: "a_example".to_string(),
        }
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn at(mut self, hh: u32, mm: u32, ss: u32) -> Self {
        self.time = (hh, mm, ss);
        self
    }

    pub fn file(mut self, input_file: impl Into<String>) -> Self {
        self.input_file = input_file.into();
        self
    }

    pub fn score(mut self, score: u64) -> Self {
        self.score = score;
        self
    }

    pub fn build(self) -> String {
        let (hh, mm, ss) = self.time;
        format!(
            "{}T{hh:02}:{mm:02}:{ss:02}.512Z INFO [judge-3] Team '{}' scored {} points on submission #17. InputFileName: {}",
            self.date, self.team, self.score, self.input_file
        )
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a submission record directly.
pub fn sub(hours_from_start: f64, team: &str, input_file: &str, score: u64) -> Submission {
    Submission {
        hours_from_start,
        team: team.to_string(),
        input_file: input_file.to_string(),
        score,
    }
}

/// Parser with the default event constants.
pub fn default_parser() -> LogParser {
    LogParser::new(&EventConfig::default()).expect("default event config compiles")
}

/// Join lines into log text with a trailing newline.
pub fn log_text<S: AsRef<str>>(lines: &[S]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line.as_ref());
        text.push('\n');
    }
    text
}
