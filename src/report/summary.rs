//! Summary of every statistic computed for one export

use serde::Serialize;

use crate::config::SourceFormat;
use crate::core::{
    EPrintAnalyzer, FrequencyTable, TrackRecordAnalyzer, DEFAULT_NUMBER_OF_YEARS,
    DEFAULT_START_YEAR,
};

/// Which statistics to compute and how
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    /// Restrict annual output to these years, in this order
    pub years: Option<Vec<i32>>,
    pub start_year: i32,
    pub number_of_years: i32,
    pub coauthor_limit: Option<usize>,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            years: None,
            start_year: DEFAULT_START_YEAR,
            number_of_years: DEFAULT_NUMBER_OF_YEARS,
            coauthor_limit: None,
        }
    }
}

/// Publication total over a run of years
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowTotal {
    pub start_year: i32,
    pub number_of_years: i32,
    pub publications: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackRecordSummary {
    pub source: String,
    pub format: SourceFormat,
    pub record_count: usize,
    pub annual_output: FrequencyTable<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_output: Option<WindowTotal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h_index: Option<u32>,
    pub coauthors: FrequencyTable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journals: Option<FrequencyTable<String>>,
}

impl TrackRecordSummary {
    pub fn from_analyzer(
        source: impl Into<String>,
        analyzer: &TrackRecordAnalyzer,
        options: &SummaryOptions,
    ) -> Self {
        Self {
            source: source.into(),
            format: SourceFormat::Scopus,
            record_count: analyzer.records().len(),
            annual_output: analyzer.annual_output(options.years.as_deref()),
            total_output: Some(WindowTotal {
                start_year: options.start_year,
                number_of_years: options.number_of_years,
                publications: analyzer.total_output(options.start_year, options.number_of_years),
            }),
            h_index: Some(analyzer.h_index()),
            coauthors: analyzer.coauthor_count(options.coauthor_limit),
            journals: Some(analyzer.journal_count()),
        }
    }

    /// ePrints exports only support annual output and co-authors
    pub fn from_eprint(
        source: impl Into<String>,
        analyzer: &EPrintAnalyzer,
        options: &SummaryOptions,
    ) -> Self {
        Self {
            source: source.into(),
            format: SourceFormat::EPrint,
            record_count: analyzer.records().len(),
            annual_output: analyzer.annual_output(options.years.as_deref()),
            total_output: None,
            h_index: None,
            coauthors: analyzer.coauthor_count(options.coauthor_limit),
            journals: None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
