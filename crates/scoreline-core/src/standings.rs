//! Standings — final ranked totals per team.
//!
//! Teams are ordered by final total (highest first). Equal totals go to the
//! team that reached it earlier, then by name. Teams tied on both total and
//! time share a rank.

use crate::error::ScorelineError;
use crate::timeline::TeamTimeline;
use crate::types::Submission;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::Write as _;
use std::path::Path;

/// One row of the standings table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    /// 1-based competition rank.
    pub rank: usize,
    pub team: String,
    pub total_score: u64,
    /// Number of parsed submissions by the team, improving or not.
    pub submissions: usize,
    /// Number of improving submissions.
    pub checkpoints: usize,
    pub last_improvement_hours: Option<f64>,
}

/// Rank every timeline. `submissions` is only used to count attempts.
pub fn standings(submissions: &[Submission], timelines: &[TeamTimeline]) -> Vec<Standing> {
    let mut rows: Vec<Standing> = timelines
        .iter()
        .map(|t| Standing {
            rank: 0,
            team: t.team.clone(),
            total_score: t.final_score(),
            submissions: submissions.iter().filter(|s| s.team == t.team).count(),
            checkpoints: t.checkpoints.len(),
            last_improvement_hours: t.last_improvement(),
        })
        .collect();

    rows.sort_by(|a, b| ranking_order(a, b).then_with(|| a.team.cmp(&b.team)));

    for i in 0..rows.len() {
        rows[i].rank = if i > 0 && ranking_order(&rows[i - 1], &rows[i]) == Ordering::Equal {
            rows[i - 1].rank
        } else {
            i + 1
        };
    }
    rows
}

fn ranking_order(a: &Standing, b: &Standing) -> Ordering {
    let time = |s: &Standing| s.last_improvement_hours.unwrap_or(f64::INFINITY);
    b.total_score
        .cmp(&a.total_score)
        .then_with(|| time(a).total_cmp(&time(b)))
}

/// Fixed-width text table, one line per team, header first.
pub fn render_table(rows: &[Standing]) -> String {
    let width = rows
        .iter()
        .map(|r| r.team.chars().count())
        .max()
        .unwrap_or(0)
        .max("Team".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<width$}  {:>10}  {:>5}  {:>5}  {}",
        "Rank", "Team", "Score", "Subs", "Steps", "Last (h)"
    );
    for r in rows {
        let last = r
            .last_improvement_hours
            .map_or_else(|| "-".to_string(), |h| format!("{h:.2}"));
        let _ = writeln!(
            out,
            "{:>4}  {:<width$}  {:>10}  {:>5}  {:>5}  {}",
            r.rank, r.team, r.total_score, r.submissions, r.checkpoints, last
        );
    }
    out
}

/// Write standings as pretty JSON.
pub fn write_json(rows: &[Standing], path: &Path) -> crate::Result<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json).map_err(|source| ScorelineError::Io {
        path: path.to_path_buf(),
        source,
    })
}
