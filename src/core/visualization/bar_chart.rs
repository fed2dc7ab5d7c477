// src/core/visualization/bar_chart.rs
//
// Bar chart rendering for publication histograms

use log::info;
use plotters::prelude::*;
use std::path::Path;

use crate::core::stats::MOVING_AVERAGE_WINDOW;
use crate::error::{Result, TrackRecordError};

/// Bar chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub bar_color: RGBColor,
    pub overlay_color: RGBColor,
    /// Years averaged by the line drawn over the differential histogram
    pub moving_average_window: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            bar_color: RGBColor(31, 119, 180),
            overlay_color: RGBColor(255, 127, 14),
            moving_average_window: MOVING_AVERAGE_WINDOW,
        }
    }
}

/// Year-labelled values to draw as bars
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    pub labels: Vec<i32>,
    pub values: Vec<f64>,
}

impl HistogramSeries {
    pub fn new(labels: Vec<i32>, values: Vec<f64>) -> Self {
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// (year, value) pairs in label order
    pub fn points(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.labels.iter().copied().zip(self.values.iter().copied())
    }
}

fn chart_error(e: impl std::fmt::Display) -> TrackRecordError {
    TrackRecordError::Chart(e.to_string())
}

/// Render `series` as a year-labelled bar chart and save it as PNG.
///
/// `overlay` holds one value per bar and is drawn as a line through the
/// bar centres.
pub fn render_bar_chart(
    series: &HistogramSeries,
    overlay: Option<&[f64]>,
    title: &str,
    y_desc: &str,
    config: &ChartConfig,
    output_path: &Path,
) -> Result<()> {
    if series.is_empty() {
        return Err(TrackRecordError::EmptyDataset);
    }
    if series.labels.len() != series.values.len() {
        return Err(TrackRecordError::Chart(format!(
            "{} labels but {} values",
            series.labels.len(),
            series.values.len()
        )));
    }
    if let Some(line) = overlay {
        if line.len() != series.len() {
            return Err(TrackRecordError::Chart(format!(
                "overlay has {} points for {} bars",
                line.len(),
                series.len()
            )));
        }
    }

    let first = series.labels.iter().copied().min().unwrap_or_default();
    // A single-year series still needs a non-degenerate axis
    let last = series
        .labels
        .iter()
        .copied()
        .max()
        .unwrap_or_default()
        .max(first.saturating_add(1));

    let max_value = series
        .values
        .iter()
        .chain(overlay.unwrap_or(&[]).iter())
        .fold(0.0f64, |acc, &v| acc.max(v));
    let y_max = if max_value > 0.0 { max_value.ceil() * 1.1 } else { 1.0 };

    let root = BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((first..last).into_segmented(), 0f64..y_max)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Year")
        .y_desc(y_desc)
        .x_labels(series.len().min(30))
        .x_label_formatter(&|value| match value {
            SegmentValue::Exact(year) | SegmentValue::CenterOf(year) => year.to_string(),
            SegmentValue::Last => String::new(),
        })
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(chart_error)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(config.bar_color.filled())
                .margin(5)
                .data(series.points()),
        )
        .map_err(chart_error)?;

    if let Some(line) = overlay {
        let points = series
            .labels
            .iter()
            .zip(line)
            .map(|(&year, &value)| (SegmentValue::CenterOf(year), value));
        chart
            .draw_series(LineSeries::new(points, config.overlay_color.stroke_width(3)))
            .map_err(chart_error)?;
    }

    root.present().map_err(chart_error)?;
    info!("chart saved to {}", output_path.display());
    Ok(())
}
