// src/core/eprint.rs
//
// Analysis of ePrints repository exports. Years come from the publication
// date and authors are joined with "and", so only the output and co-author
// queries apply.

use std::io::Read;
use std::path::Path;

use super::analyzer::{annual_output, coauthor_count};
use super::frequency::FrequencyTable;
use super::loader::RawTable;
use super::record::RecordSet;
use crate::config::{ColumnMap, SourceFormat};
use crate::error::Result;

pub struct EPrintAnalyzer {
    records: RecordSet,
}

impl EPrintAnalyzer {
    /// Load an ePrints export using the default column names
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_columns(path, &ColumnMap::from_format(SourceFormat::EPrint))
    }

    pub fn with_columns<P: AsRef<Path>>(path: P, columns: &ColumnMap) -> Result<Self> {
        let table = RawTable::from_path(path.as_ref())?;
        Ok(Self {
            records: RecordSet::from_table(&table, columns)?,
        })
    }

    pub fn from_reader<R: Read>(reader: R, columns: &ColumnMap) -> Result<Self> {
        let table = RawTable::from_reader(reader)?;
        Ok(Self {
            records: RecordSet::from_table(&table, columns)?,
        })
    }

    pub fn from_records(records: RecordSet) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Publications per year of the publication date; see
    /// [`TrackRecordAnalyzer::annual_output`](super::TrackRecordAnalyzer::annual_output)
    pub fn annual_output(&self, years: Option<&[i32]>) -> FrequencyTable<i32> {
        annual_output(&self.records, years)
    }

    /// Co-author surnames with the analysed author left out; see
    /// [`TrackRecordAnalyzer::coauthor_count`](super::TrackRecordAnalyzer::coauthor_count)
    pub fn coauthor_count(&self, limit: Option<usize>) -> FrequencyTable<String> {
        coauthor_count(&self.records, limit)
    }
}
