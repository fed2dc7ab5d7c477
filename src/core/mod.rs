//! Core loading, aggregation and charting modules

pub mod analyzer;
pub mod eprint;
pub mod frequency;
pub mod loader;
pub mod record;
pub mod stats;
pub mod visualization;

pub use analyzer::{AnalyzerBuilder, TrackRecordAnalyzer, DEFAULT_NUMBER_OF_YEARS, DEFAULT_START_YEAR};
pub use eprint::EPrintAnalyzer;
pub use frequency::FrequencyTable;
pub use loader::RawTable;
pub use record::{Author, Record, RecordSet};
pub use visualization::{ChartConfig, HistogramSeries};
