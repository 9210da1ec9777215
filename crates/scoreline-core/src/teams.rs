//! Team selection for the report.

use crate::types::Submission;
use std::collections::BTreeSet;

/// True if `team` is a placeholder entry that the report leaves out.
///
/// An empty `exclude_substring` excludes nothing.
pub fn is_excluded(team: &str, exclude_substring: &str) -> bool {
    !exclude_substring.is_empty() && team.contains(exclude_substring)
}

/// Distinct reported teams, sorted by identifier.
pub fn report_teams(submissions: &[Submission], exclude_substring: &str) -> Vec<String> {
    submissions
        .iter()
        .map(|s| s.team.as_str())
        .filter(|team| !is_excluded(team, exclude_substring))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
