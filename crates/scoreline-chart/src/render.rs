//! SVG chart rendering with `plotters`.
//!
//! The combined chart draws every team as filled circle markers (with a legend
//! entry) joined by a black dashed line. A team chart draws the dashed line in
//! the team colour with cross markers. Both share axis labels and a grid.

use crate::ChartError;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use scoreline_core::config::ChartConfig;
use scoreline_core::TeamTimeline;
use std::ops::Range;
use std::path::Path;

const X_DESC: &str = "Time Since start [hours]";
const Y_DESC: &str = "Total Score [points]";
const MARKER_SIZE: i32 = 4;

type Chart<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Image geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub caption_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from(&ChartConfig::default())
    }
}

impl From<&ChartConfig> for ChartStyle {
    fn from(cfg: &ChartConfig) -> Self {
        Self {
            width: cfg.width,
            height: cfg.height,
            caption_size: cfg.caption_size,
        }
    }
}

/// Render every timeline onto one chart titled "All teams".
pub fn render_all_teams(
    timelines: &[TeamTimeline],
    path: &Path,
    style: &ChartStyle,
) -> Result<(), ChartError> {
    let err = |e: &dyn std::fmt::Display| render_error(path, e);

    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(&e))?;

    let (x, y) = axis_ranges(timelines);
    let mut chart = configured_chart(&root, "All teams", style, x, y).map_err(|e| err(&e))?;

    for (idx, timeline) in timelines.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let points = points(timeline);

        chart
            .draw_series(points.iter().map(|&p| Circle::new(p, MARKER_SIZE, color.filled())))
            .map_err(|e| err(&e))?
            .label(timeline.team.as_str())
            .legend(move |(x, y)| Circle::new((x, y), MARKER_SIZE, color.filled()));
        chart
            .draw_series(DashedLineSeries::new(points, 6, 4, BLACK.stroke_width(1)))
            .map_err(|e| err(&e))?;
    }

    if !timelines.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| err(&e))?;
    }

    root.present().map_err(|e| err(&e))?;
    tracing::debug!(path = %path.display(), teams = timelines.len(), "rendered combined chart");
    Ok(())
}

/// Render one team's timeline onto its own chart.
pub fn render_team(timeline: &TeamTimeline, path: &Path, style: &ChartStyle) -> Result<(), ChartError> {
    let err = |e: &dyn std::fmt::Display| render_error(path, e);

    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(&e))?;

    let (x, y) = axis_ranges(std::slice::from_ref(timeline));
    let caption = format!("Team \"{}\"", timeline.team);
    let mut chart = configured_chart(&root, &caption, style, x, y).map_err(|e| err(&e))?;

    let color = Palette99::pick(0).to_rgba();
    let points = points(timeline);
    chart
        .draw_series(DashedLineSeries::new(points.clone(), 6, 4, color.stroke_width(2)))
        .map_err(|e| err(&e))?;
    chart
        .draw_series(points.iter().map(|&p| Cross::new(p, MARKER_SIZE, color.stroke_width(2))))
        .map_err(|e| err(&e))?;

    root.present().map_err(|e| err(&e))?;
    tracing::debug!(path = %path.display(), team = %timeline.team, "rendered team chart");
    Ok(())
}

fn configured_chart<'a, 'b>(
    root: &'a DrawingArea<SVGBackend<'b>, Shift>,
    caption: &str,
    style: &ChartStyle,
    x: Range<f64>,
    y: Range<f64>,
) -> Result<Chart<'a, 'b>, DrawingAreaErrorKind<std::io::Error>> {
    let mut chart = ChartBuilder::on(root)
        .caption(caption, ("sans-serif", style.caption_size))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(80)
        .build_cartesian_2d(x, y)?;

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .draw()?;

    Ok(chart)
}

fn points(timeline: &TeamTimeline) -> Vec<(f64, f64)> {
    timeline
        .checkpoints
        .iter()
        .map(|c| (c.hours_from_start, c.total_score as f64))
        .collect()
}

/// Axis ranges covering every checkpoint, with a little headroom. Falls back
/// to a unit square when there is nothing to draw.
fn axis_ranges(timelines: &[TeamTimeline]) -> (Range<f64>, Range<f64>) {
    let checkpoints = timelines.iter().flat_map(|t| t.checkpoints.iter());

    let (mut x_min, mut x_max, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY, 0.0_f64);
    for c in checkpoints {
        x_min = x_min.min(c.hours_from_start);
        x_max = x_max.max(c.hours_from_start);
        y_max = y_max.max(c.total_score as f64);
    }

    if !x_min.is_finite() {
        return (0.0..1.0, 0.0..1.0);
    }

    let x_pad = ((x_max - x_min) * 0.05).max(0.5);
    let y_top = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };
    ((x_min - x_pad)..(x_max + x_pad), 0.0..y_top)
}

fn render_error(path: &Path, err: &dyn std::fmt::Display) -> ChartError {
    ChartError::Render {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
