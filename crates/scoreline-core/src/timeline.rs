//! Timeline — folds submissions into a team's cumulative best-score curve.
//!
//! For every input file the running maximum of the team's scores is tracked;
//! the team's total is the sum of those maxima. A checkpoint is emitted each
//! time a submission raises the maximum for its file.
//!
//! The set of input files is collected from the submissions of *all* teams,
//! each starting at 0, before the target team's submissions are folded in.

use crate::types::{Submission, TotalScore};
use std::collections::BTreeMap;

/// Lazy iterator over a team's improving checkpoints.
pub struct TotalScores<'a> {
    team: &'a str,
    submissions: std::slice::Iter<'a, Submission>,
    best: BTreeMap<&'a str, u64>,
    total: u64,
}

/// Cumulative best-score checkpoints for `team`, in submission order.
pub fn total_score_over_time<'a>(team: &'a str, submissions: &'a [Submission]) -> TotalScores<'a> {
    let best = submissions
        .iter()
        .map(|s| (s.input_file.as_str(), 0))
        .collect();

    TotalScores {
        team,
        submissions: submissions.iter(),
        best,
        total: 0,
    }
}

impl<'a> TotalScores<'a> {
    /// Every input file known to the fold, across all teams.
    pub fn input_files(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.best.keys().copied()
    }

    /// Best score so far on `input_file`, or `None` for a file no team submitted.
    pub fn best_for(&self, input_file: &str) -> Option<u64> {
        self.best.get(input_file).copied()
    }
}

impl Iterator for TotalScores<'_> {
    type Item = TotalScore;

    fn next(&mut self) -> Option<TotalScore> {
        for s in self.submissions.by_ref() {
            if s.team != self.team {
                continue;
            }
            let Some(best) = self.best.get_mut(s.input_file.as_str()) else {
                continue;
            };
            if s.score > *best {
                let Some(total) = (self.total - *best).checked_add(s.score) else {
                    tracing::warn!(
                        team = self.team,
                        input_file = %s.input_file,
                        score = s.score,
                        "total score overflows u64; submission ignored"
                    );
                    continue;
                };
                self.total = total;
                *best = s.score;
                return Some(TotalScore {
                    hours_from_start: s.hours_from_start,
                    team: self.team.to_string(),
                    total_score: self.total,
                });
            }
        }
        None
    }
}

/// A team's materialised checkpoint series, as handed to the chart renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamTimeline {
    pub team: String,
    pub checkpoints: Vec<TotalScore>,
}

impl TeamTimeline {
    pub fn build(team: &str, submissions: &[Submission]) -> Self {
        Self {
            team: team.to_string(),
            checkpoints: total_score_over_time(team, submissions).collect(),
        }
    }

    /// Total at the last checkpoint, 0 for a team that never scored.
    pub fn final_score(&self) -> u64 {
        self.checkpoints.last().map_or(0, |c| c.total_score)
    }

    /// Time of the last improvement, if any.
    pub fn last_improvement(&self) -> Option<f64> {
        self.checkpoints.last().map(|c| c.hours_from_start)
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
