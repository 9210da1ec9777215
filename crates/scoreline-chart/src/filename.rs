//! Team name → chart file stem.

use std::collections::HashSet;

/// Stems used by the combined outputs; a team may not take them.
pub const RESERVED_STEMS: &[&str] = &["all_teams", "standings"];

/// Map a team identifier onto a filesystem-safe file stem.
///
/// ASCII alphanumerics, `-` and `_` are kept; every other character becomes
/// `_`. An empty name becomes `team`, and a name colliding with one of
/// [`RESERVED_STEMS`] gets a `_team` suffix.
pub fn sanitize_file_stem(team: &str) -> String {
    let mut stem: String = team
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() {
        stem.push_str("team");
    }
    if RESERVED_STEMS.contains(&stem.as_str()) {
        stem.push_str("_team");
    }
    stem
}

/// Hands out distinct stems for one output directory.
///
/// Two team names can sanitise to the same stem (`a b` and `a_b`). The first
/// claim keeps the plain stem; later ones get `_2`, `_3`, ... appended, skipping
/// any suffix already taken.
#[derive(Debug, Default)]
pub struct StemRegistry {
    used: HashSet<String>,
}

impl StemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitise `team` and reserve a stem no earlier claim holds.
    pub fn claim(&mut self, team: &str) -> String {
        let base = sanitize_file_stem(team);
        let mut stem = base.clone();
        let mut n = 2;
        while self.used.contains(&stem) {
            stem = format!("{base}_{n}");
            n += 1;
        }
        if stem != base {
            tracing::debug!(team, stem = %stem, "file stem already taken; suffixed");
        }
        self.used.insert(stem.clone());
        stem
    }
}
