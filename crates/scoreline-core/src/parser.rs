//! Parser — scans raw log text into [`Submission`](crate::Submission) records.
//!
//! A submission line carries, in this order on a single line: an event-date
//! timestamp `YYYY-MM-DDThh:mm:ss`, `Team '<name>'`, `scored <n>` and
//! `InputFileName: <file>`. Anything else is ignored without error.

use crate::config::EventConfig;
use crate::types::Submission;
use regex::{CaptureMatches, Captures, Regex};

/// Compiled submission-line matcher plus the time normalisation constants.
#[derive(Debug, Clone)]
pub struct LogParser {
    pattern: Regex,
    timezone_offset_hours: f64,
    start_hour: f64,
}

impl LogParser {
    pub fn new(event: &EventConfig) -> crate::Result<Self> {
        let date = regex::escape(&event.date.format("%Y-%m-%d").to_string());
        let pattern = Regex::new(&format!(
            r"{date}T([0-9]+):([0-9]+):([0-9]+).*Team '([^']+)'.*scored ([0-9]+).*InputFileName: ([_a-z]+)"
        ))?;

        Ok(Self {
            pattern,
            timezone_offset_hours: event.timezone_offset_hours,
            start_hour: event.start_hour,
        })
    }

    /// Lazily yield every submission in `text`, in text order.
    ///
    /// The iterator borrows `text`; calling this again on the same text yields
    /// the same sequence.
    pub fn submissions<'p, 't>(&'p self, text: &'t str) -> Submissions<'p, 't> {
        Submissions {
            parser: self,
            captures: self.pattern.captures_iter(text),
        }
    }

    /// `(hh + tz) + mm/60 + ss/3600 - start`, in hours.
    pub fn hours_from_start(&self, hh: f64, mm: f64, ss: f64) -> f64 {
        ((hh + self.timezone_offset_hours) + mm / 60.0 + ss / 3600.0) - self.start_hour
    }

    fn submission(&self, caps: &Captures<'_>) -> Option<Submission> {
        let hh: f64 = caps[1].parse().ok()?;
        let mm: f64 = caps[2].parse().ok()?;
        let ss: f64 = caps[3].parse().ok()?;

        let score = match caps[5].parse::<u64>() {
            Ok(score) => score,
            Err(err) => {
                tracing::debug!(score = &caps[5], %err, "skipping submission with unrepresentable score");
                return None;
            }
        };

        Some(Submission {
            hours_from_start: self.hours_from_start(hh, mm, ss),
            team: caps[4].to_string(),
            input_file: caps[6].to_string(),
            score,
        })
    }
}

/// Iterator returned by [`LogParser::submissions`].
pub struct Submissions<'p, 't> {
    parser: &'p LogParser,
    captures: CaptureMatches<'p, 't>,
}

impl Iterator for Submissions<'_, '_> {
    type Item = Submission;

    fn next(&mut self) -> Option<Submission> {
        for caps in self.captures.by_ref() {
            if let Some(submission) = self.parser.submission(&caps) {
                return Some(submission);
            }
        }
        None
    }
}

/// Collect every submission in `text`.
pub fn parse_submissions(parser: &LogParser, text: &str) -> Vec<Submission> {
    parser.submissions(text).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
