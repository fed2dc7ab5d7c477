//! Configuration module for trackrecord

mod columns;

pub use columns::{AuthorLayout, ColumnMap, ColumnMapBuilder, SourceFormat, YearKind};
