//! Core records for scoreline-core.
//!
//! [`Submission`] is what the parser yields for each matched log line;
//! [`TotalScore`] is one step of a team's running best-score curve.

use serde::Serialize;

/// One scored submission, parsed from a single log line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    /// Fractional hours since the competition start. Negative for lines
    /// logged before the start.
    pub hours_from_start: f64,
    /// Team identifier exactly as it appears between the quotes.
    pub team: String,
    /// Identifier of the scored input file (lowercase, underscores).
    pub input_file: String,
    pub score: u64,
}

/// A checkpoint of a team's cumulative best score.
///
/// Only emitted when the total improves, so a sequence of these is strictly
/// increasing in `total_score`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalScore {
    pub hours_from_start: f64,
    pub team: String,
    /// Sum over every known input file of the team's best score on it so far.
    pub total_score: u64,
}

impl std::fmt::Display for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:+.3}h {} {} {}",
            self.hours_from_start, self.team, self.input_file, self.score
        )
    }
}

impl std::fmt::Display for TotalScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+.3}h {} {}", self.hours_from_start, self.team, self.total_score)
    }
}
