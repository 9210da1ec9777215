//! scoreline-chart — renders cumulative best-score timelines to SVG.
//!
//! Two chart shapes are produced: one combined chart overlaying every team
//! ([`render_all_teams`]) and one dedicated chart per team ([`render_team`]).

pub mod filename;
pub mod render;

pub use filename::{sanitize_file_stem, StemRegistry};
pub use render::{render_all_teams, render_team, ChartStyle};

/// Errors produced while drawing a chart.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("chart rendering failed for {}: {message}", path.display())]
    Render {
        path: std::path::PathBuf,
        message: String,
    },
}
