//! scoreline — cumulative best-score-over-time charts from a submission log.
//!
//! The driver ties the library crates together:
//!
//! ```text
//! log.txt ──► scoreline_core::parser ──► timeline per team ──► scoreline_chart
//!                                                        └──► standings.json
//! ```
//!
//! [`run`] is synchronous and single-threaded: one file read, then one file
//! write per chart plus the standings export.

use anyhow::Context;
use scoreline_chart::{render_all_teams, render_team, ChartStyle, StemRegistry};
use scoreline_core::config::Config;
use scoreline_core::parser::parse_submissions;
use scoreline_core::standings::{self, Standing};
use scoreline_core::teams::report_teams;
use scoreline_core::{LogParser, TeamTimeline};
use std::path::PathBuf;

/// File stem of the combined chart.
pub const ALL_TEAMS_STEM: &str = "all_teams";
/// File name of the standings export.
pub const STANDINGS_FILE: &str = "standings.json";

/// What a run wrote, and the ranking it computed.
#[derive(Debug, Clone)]
pub struct Report {
    pub combined_chart: PathBuf,
    pub team_charts: Vec<PathBuf>,
    pub standings_path: PathBuf,
    pub standings: Vec<Standing>,
    /// Submissions parsed from the log, including excluded teams.
    pub submissions: usize,
}

/// Read the configured log, render every chart and write the standings.
pub fn run(config: &Config) -> anyhow::Result<Report> {
    let log_path = &config.report.log_path;
    let text = std::fs::read_to_string(log_path)
        .with_context(|| format!("reading log file {}", log_path.display()))?;

    let parser = LogParser::new(&config.event)?;
    let submissions = parse_submissions(&parser, &text);
    let teams = report_teams(&submissions, &config.report.exclude_team_substring);
    tracing::info!(
        log = %log_path.display(),
        submissions = submissions.len(),
        teams = teams.len(),
        "parsed submission log"
    );

    let timelines: Vec<TeamTimeline> = teams
        .iter()
        .map(|team| {
            let timeline = TeamTimeline::build(team, &submissions);
            tracing::debug!(
                team = %team,
                checkpoints = timeline.checkpoints.len(),
                final_score = timeline.final_score(),
                "built team timeline"
            );
            timeline
        })
        .collect();

    let out_dir = &config.report.output_dir;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let style = ChartStyle::from(&config.chart);
    let mut stems = StemRegistry::new();
    let mut team_charts = Vec::with_capacity(timelines.len());
    for timeline in &timelines {
        let path = out_dir.join(format!("{}.svg", stems.claim(&timeline.team)));
        render_team(timeline, &path, &style)?;
        team_charts.push(path);
    }

    let combined_chart = out_dir.join(format!("{ALL_TEAMS_STEM}.svg"));
    render_all_teams(&timelines, &combined_chart, &style)?;

    let standings = standings::standings(&submissions, &timelines);
    let standings_path = out_dir.join(STANDINGS_FILE);
    standings::write_json(&standings, &standings_path)?;

    tracing::info!(
        out_dir = %out_dir.display(),
        charts = team_charts.len() + 1,
        "report written"
    );

    Ok(Report {
        combined_chart,
        team_charts,
        standings_path,
        standings,
        submissions: submissions.len(),
    })
}
