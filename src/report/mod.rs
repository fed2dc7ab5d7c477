//! Report types for trackrecord

mod summary;

pub use summary::{SummaryOptions, TrackRecordSummary, WindowTotal};
