//! Visualization tools for track record analysis
//!
//! Contains bar chart rendering for the publication histograms.

mod bar_chart;

pub use bar_chart::{render_bar_chart, ChartConfig, HistogramSeries};
