// src/core/loader.rs
//
// Delimited source loading. Produces a column-addressable raw table; typed
// conversion happens in `record.rs`.

use log::{debug, info};
use std::io::Read;
use std::path::Path;

use crate::error::{Result, TrackRecordError};

/// Header plus string cells of a CSV source
#[derive(Debug, Clone)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    /// 1-based source line where each row starts
    lines: Vec<usize>,
}

impl RawTable {
    /// Read a comma-delimited file with a header row
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|source| TrackRecordError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        let table = Self::from_csv(reader)?;
        info!("loaded {} rows from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        Self::from_csv(reader)
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let headers = reader
            .headers()?
            .iter()
            // Scopus exports start with a UTF-8 BOM
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        let mut lines = Vec::new();
        for result in reader.records() {
            let record = result?;
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(rows.len() + 2);
            lines.push(line);
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!("headers: {:?}", headers);
        Ok(Self {
            headers,
            rows,
            lines,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Source line of the `index`-th data row, for error messages
    pub fn line(&self, index: usize) -> usize {
        self.lines[index]
    }

    /// Ordered cell values of the named column.
    ///
    /// Short rows yield empty cells.
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let index = self
            .headers
            .iter()
            .position(|h| h == name.trim())
            .ok_or_else(|| TrackRecordError::MissingColumn {
                column: name.to_string(),
            })?;

        Ok(self
            .rows
            .iter()
            .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
            .collect())
    }
}
