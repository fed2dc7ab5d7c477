// src/config/columns.rs
//
// Column layouts for the supported citation database exports

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TrackRecordError};

/// How the year column is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearKind {
    /// Plain integer year ("2016")
    Integer,
    /// Full or partial date ("2016-05-12", "12/05/2016", "2016-05")
    Date,
}

/// How the authors column is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorLayout {
    /// "Surname, Given, Surname2, Given2, ..."
    AlternatingCommas,
    /// "Surname, Given and Surname2, Given2[, Given...]"
    AndSeparated,
}

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    /// Scopus CSV export
    Scopus,
    /// ePrints repository CSV export
    EPrint,
}

impl SourceFormat {
    pub fn all() -> Vec<Self> {
        vec![Self::Scopus, Self::EPrint]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "scopus" => Some(Self::Scopus),
            "eprint" | "eprints" => Some(Self::EPrint),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Scopus => "scopus",
            Self::EPrint => "eprint",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Scopus => "Scopus export (Year, Authors, Source title, Cited by)",
            Self::EPrint => "ePrints export (date published, and-separated authors)",
        }
    }
}

/// Maps record fields onto named CSV columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    /// Column holding the publication year or date
    pub year: String,
    pub year_kind: YearKind,
    pub authors: String,
    pub author_layout: AuthorLayout,
    /// Venue (journal / source title) column, if the export has one
    #[serde(default)]
    pub venue: Option<String>,
    /// Citation count column, if the export has one
    #[serde(default)]
    pub citations: Option<String>,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::from_format(SourceFormat::Scopus)
    }
}

impl ColumnMap {
    /// Column map for a preset export format
    pub fn from_format(format: SourceFormat) -> Self {
        match format {
            SourceFormat::Scopus => Self::scopus(),
            SourceFormat::EPrint => Self::eprint(),
        }
    }

    fn scopus() -> Self {
        Self {
            year: "Year".to_string(),
            year_kind: YearKind::Integer,
            authors: "Authors".to_string(),
            author_layout: AuthorLayout::AlternatingCommas,
            venue: Some("Source title".to_string()),
            citations: Some("Cited by".to_string()),
        }
    }

    fn eprint() -> Self {
        Self {
            year: "date published".to_string(),
            year_kind: YearKind::Date,
            authors: "authors".to_string(),
            author_layout: AuthorLayout::AndSeparated,
            venue: Some("publication".to_string()),
            citations: None,
        }
    }

    /// Load a column map from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let map: Self = serde_json::from_str(&text)?;
        map.validate()?;
        Ok(map)
    }

    /// Reject maps with blank column names
    pub fn validate(&self) -> Result<()> {
        let named = [
            Some(&self.year),
            Some(&self.authors),
            self.venue.as_ref(),
            self.citations.as_ref(),
        ];
        if named.iter().flatten().any(|name| name.trim().is_empty()) {
            return Err(TrackRecordError::Config(
                "column names must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for overriding individual columns of a preset
pub struct ColumnMapBuilder {
    map: ColumnMap,
}

impl ColumnMapBuilder {
    pub fn new() -> Self {
        Self {
            map: ColumnMap::default(),
        }
    }

    pub fn from_format(format: SourceFormat) -> Self {
        Self {
            map: ColumnMap::from_format(format),
        }
    }

    pub fn year(mut self, column: impl Into<String>, kind: YearKind) -> Self {
        self.map.year = column.into();
        self.map.year_kind = kind;
        self
    }

    pub fn authors(mut self, column: impl Into<String>, layout: AuthorLayout) -> Self {
        self.map.authors = column.into();
        self.map.author_layout = layout;
        self
    }

    pub fn venue(mut self, column: Option<String>) -> Self {
        self.map.venue = column;
        self
    }

    pub fn citations(mut self, column: Option<String>) -> Self {
        self.map.citations = column;
        self
    }

    pub fn build(self) -> Result<ColumnMap> {
        self.map.validate()?;
        Ok(self.map)
    }
}

impl Default for ColumnMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
