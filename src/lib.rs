//! trackrecord - Bibliometric summaries of a publication track record
//!
//! Reads a citation database export (Scopus or ePrints CSV) and computes the
//! statistics usually quoted in a track record: publications per year,
//! total output over a run of years, h-index, co-author and venue
//! frequencies. Also renders a differential (optionally five-year moving
//! average) and a cumulative publication histogram.
//!
//! ## Module Structure
//!
//! - `core` - Loading, typed records, aggregation and charting
//! - `cli` - Command-line interface
//! - `config` - Export column layouts
//! - `report` - Serializable summary of all statistics
//! - `error` - Error types
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trackrecord::TrackRecordAnalyzer;
//!
//! let analyzer = TrackRecordAnalyzer::new("scopus.csv")?;
//!
//! println!("h-index: {}", analyzer.h_index());
//! println!("2012-2016: {}", analyzer.total_output(2012, 5));
//! for (surname, count) in analyzer.coauthor_count(Some(10)) {
//!     println!("{surname}: {count}");
//! }
//! ```
//!
//! ## Ranking
//!
//! Every ranked table orders by count, highest first. Equal counts keep the
//! order in which keys first appear in the export. The co-author ranking
//! leaves out its top entry, which is the analysed author.

// Core analysis functionality
pub mod core;

// Command-line interface
pub mod cli;

// Column layouts
pub mod config;

// Summary report
pub mod report;

pub mod error;

// Re-export commonly used types at crate root for convenience
pub use crate::config::{AuthorLayout, ColumnMap, ColumnMapBuilder, SourceFormat, YearKind};
pub use crate::core::{
    AnalyzerBuilder, Author, ChartConfig, EPrintAnalyzer, FrequencyTable, HistogramSeries,
    RawTable, Record, RecordSet, TrackRecordAnalyzer, DEFAULT_NUMBER_OF_YEARS,
    DEFAULT_START_YEAR,
};
pub use crate::error::{Result, TrackRecordError};
pub use crate::report::{SummaryOptions, TrackRecordSummary};
