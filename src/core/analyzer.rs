// src/core/analyzer.rs
//
// High-level track record analysis API with builder pattern.

use log::debug;
use std::io::Read;
use std::path::Path;

use super::frequency::FrequencyTable;
use super::loader::RawTable;
use super::record::RecordSet;
use super::stats;
use super::visualization::{render_bar_chart, ChartConfig, HistogramSeries};
use crate::config::{ColumnMap, SourceFormat};
use crate::error::Result;

/// First year of the default total-output window
pub const DEFAULT_START_YEAR: i32 = 2012;
/// Length of the default total-output window
pub const DEFAULT_NUMBER_OF_YEARS: i32 = 5;

/// Builder for TrackRecordAnalyzer configuration
pub struct AnalyzerBuilder {
    columns: ColumnMap,
    chart: ChartConfig,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            columns: ColumnMap::default(),
            chart: ChartConfig::default(),
        }
    }

    pub fn format(mut self, format: SourceFormat) -> Self {
        self.columns = ColumnMap::from_format(format);
        self
    }

    pub fn columns(mut self, columns: ColumnMap) -> Self {
        self.columns = columns;
        self
    }

    pub fn chart_config(mut self, chart: ChartConfig) -> Self {
        self.chart = chart;
        self
    }

    /// Load records from a CSV file
    pub fn build<P: AsRef<Path>>(self, path: P) -> Result<TrackRecordAnalyzer> {
        let table = RawTable::from_path(path.as_ref())?;
        self.build_from_table(&table)
    }

    /// Load records from any CSV byte stream
    pub fn build_from_reader<R: Read>(self, reader: R) -> Result<TrackRecordAnalyzer> {
        let table = RawTable::from_reader(reader)?;
        self.build_from_table(&table)
    }

    fn build_from_table(self, table: &RawTable) -> Result<TrackRecordAnalyzer> {
        let records = RecordSet::from_table(table, &self.columns)?;
        Ok(TrackRecordAnalyzer {
            records,
            chart: self.chart,
        })
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate queries over an immutable set of publication records
pub struct TrackRecordAnalyzer {
    records: RecordSet,
    chart: ChartConfig,
}

impl TrackRecordAnalyzer {
    /// Load a Scopus export with default configuration
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        AnalyzerBuilder::new().build(path)
    }

    /// Create a builder for custom configuration
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Wrap already-typed records
    pub fn from_records(records: RecordSet) -> Self {
        Self {
            records,
            chart: ChartConfig::default(),
        }
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Publications per year, most productive year first.
    ///
    /// With `Some(years)` the table instead holds only the requested years
    /// that have publications, in the order they were requested.
    pub fn annual_output(&self, years: Option<&[i32]>) -> FrequencyTable<i32> {
        annual_output(&self.records, years)
    }

    /// Publications in `[start_year, start_year + number_of_years)`
    pub fn total_output(&self, start_year: i32, number_of_years: i32) -> usize {
        if number_of_years <= 0 {
            return 0;
        }
        let end = start_year.saturating_add(number_of_years);
        self.annual_output(None)
            .iter()
            .filter(|(year, _)| (start_year..end).contains(year))
            .map(|(_, count)| count)
            .sum()
    }

    /// Co-author surnames ranked by number of shared records.
    ///
    /// The most frequent surname is taken to be the analysed author and
    /// left out. `limit` caps the result after that.
    pub fn coauthor_count(&self, limit: Option<usize>) -> FrequencyTable<String> {
        coauthor_count(&self.records, limit)
    }

    /// Publication venues ranked by number of records
    pub fn journal_count(&self) -> FrequencyTable<String> {
        FrequencyTable::tally(self.records.venues().map(str::to_string))
    }

    /// h-index over records with a citation count
    pub fn h_index(&self) -> u32 {
        stats::h_index(self.records.citation_counts())
    }

    /// Data for the differential publication histogram.
    ///
    /// Without averaging: each year that has publications with its count.
    /// With averaging: every year from first to last publication with the
    /// trailing mean over the configured window (five years by default).
    pub fn differential_histogram(&self, use_moving_average: bool) -> HistogramSeries {
        let counts = stats::dense_year_counts(self.records.years());
        if use_moving_average {
            let window = self.chart.moving_average_window;
            let (labels, values) = stats::trailing_moving_average(&counts, window)
                .into_iter()
                .unzip();
            HistogramSeries::new(labels, values)
        } else {
            let (labels, values) = counts
                .into_iter()
                .filter(|&(_, count)| count > 0)
                .map(|(year, count)| (year, count as f64))
                .unzip();
            HistogramSeries::new(labels, values)
        }
    }

    /// Data for the cumulative publication histogram
    pub fn cumulative_histogram(&self) -> HistogramSeries {
        let (labels, values) = stats::cumulative_counts(self.records.years())
            .into_iter()
            .map(|(year, total)| (year, total as f64))
            .unzip();
        HistogramSeries::new(labels, values)
    }

    /// Render publications per year as a bar chart.
    ///
    /// With `use_moving_average` the bars cover every year in range and the
    /// trailing mean is drawn over them. Fails with `EmptyDataset` when no
    /// record has a year.
    pub fn plot_differential_publication_histogram(
        &self,
        use_moving_average: bool,
        output_path: &Path,
    ) -> Result<()> {
        if use_moving_average {
            let counts = stats::dense_year_counts(self.records.years());
            let bars = HistogramSeries::new(
                counts.keys().copied().collect(),
                counts.values().map(|&c| c as f64).collect(),
            );
            let averages = self.differential_histogram(true);
            let title = format!(
                "Publications per year ({}-year moving average)",
                self.chart.moving_average_window
            );
            render_bar_chart(
                &bars,
                Some(averages.values.as_slice()),
                &title,
                "Publications",
                &self.chart,
                output_path,
            )
        } else {
            let bars = self.differential_histogram(false);
            render_bar_chart(
                &bars,
                None,
                "Publications per year",
                "Publications",
                &self.chart,
                output_path,
            )
        }
    }

    /// Render the running publication total per year as a bar chart
    pub fn plot_cumulative_publication_histogram(&self, output_path: &Path) -> Result<()> {
        render_bar_chart(
            &self.cumulative_histogram(),
            None,
            "Cumulative publications",
            "Total publications",
            &self.chart,
            output_path,
        )
    }
}

pub(crate) fn annual_output(records: &RecordSet, years: Option<&[i32]>) -> FrequencyTable<i32> {
    let ranked = FrequencyTable::tally(records.years());
    let Some(requested) = years else {
        return ranked;
    };

    let mut entries: Vec<(i32, usize)> = Vec::with_capacity(requested.len());
    for &year in requested {
        if entries.iter().any(|(y, _)| *y == year) {
            continue;
        }
        if let Some(count) = ranked.get(&year) {
            entries.push((year, count));
        }
    }
    FrequencyTable::from_entries(entries)
}

pub(crate) fn coauthor_count(records: &RecordSet, limit: Option<usize>) -> FrequencyTable<String> {
    let ranked = FrequencyTable::tally(records.surnames().map(str::to_string));
    if let Some((subject, count)) = ranked.first() {
        debug!("excluding '{}' ({} occurrences) as the analysed author", subject, count);
    }

    let coauthors = ranked.skip(1);
    match limit {
        Some(limit) => coauthors.truncate(limit),
        None => coauthors,
    }
}
