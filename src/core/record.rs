// src/core/record.rs
//
// Typed bibliographic records, built once from a raw table.

use chrono::{Datelike, NaiveDate};
use log::debug;

use super::loader::RawTable;
use crate::config::{AuthorLayout, ColumnMap, YearKind};
use crate::error::{Result, TrackRecordError};

/// One author of a publication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub surname: String,
    /// Given names / initials, as written in the export
    pub given: String,
}

/// One publication entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub year: Option<i32>,
    pub venue: Option<String>,
    pub authors: Vec<Author>,
    pub citations: Option<u32>,
}

/// Immutable, ordered collection of records
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Convert every row of `table` into a typed [`Record`].
    ///
    /// Fails on the first cell that does not match the column map; blank
    /// cells become `None` (or an empty author list).
    pub fn from_table(table: &RawTable, columns: &ColumnMap) -> Result<Self> {
        let years = table.column(&columns.year)?;
        let authors = table.column(&columns.authors)?;
        let venues = columns
            .venue
            .as_deref()
            .map(|name| table.column(name))
            .transpose()?;
        let citations = columns
            .citations
            .as_deref()
            .map(|name| table.column(name))
            .transpose()?;

        let mut records = Vec::with_capacity(table.len());
        for i in 0..table.len() {
            let line = table.line(i);
            let record = Record {
                year: match columns.year_kind {
                    YearKind::Integer => parse_year(line, years[i])?,
                    YearKind::Date => parse_date_year(line, years[i])?,
                },
                venue: venues.as_ref().and_then(|v| non_blank(v[i]).map(str::to_string)),
                authors: match columns.author_layout {
                    AuthorLayout::AlternatingCommas => parse_alternating_authors(line, authors[i])?,
                    AuthorLayout::AndSeparated => parse_and_separated_authors(line, authors[i])?,
                },
                citations: match &citations {
                    Some(values) => parse_citations(line, values[i])?,
                    None => None,
                },
            };
            records.push(record);
        }

        debug!(
            "built {} records ({} without year, {} without citation count)",
            records.len(),
            records.iter().filter(|r| r.year.is_none()).count(),
            records.iter().filter(|r| r.citations.is_none()).count(),
        );

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Years of all dated records, in record order
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.records.iter().filter_map(|r| r.year)
    }

    /// Trimmed surnames of every author of every record, in record order
    pub fn surnames(&self) -> impl Iterator<Item = &str> + '_ {
        self.records
            .iter()
            .flat_map(|r| r.authors.iter().map(|a| a.surname.as_str()))
    }

    pub fn venues(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().filter_map(|r| r.venue.as_deref())
    }

    /// Citation counts of records that have one
    pub fn citation_counts(&self) -> impl Iterator<Item = u32> + '_ {
        self.records.iter().filter_map(|r| r.citations)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn non_blank(cell: &str) -> Option<&str> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Years outside this range are treated as data errors
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// Spreadsheet round-trips turn integers into "12.0"
fn strip_integral_suffix(value: &str) -> &str {
    value.strip_suffix(".0").unwrap_or(value)
}

pub(crate) fn parse_year(line: usize, cell: &str) -> Result<Option<i32>> {
    let Some(value) = non_blank(cell) else {
        return Ok(None);
    };
    match strip_integral_suffix(value).parse::<i32>() {
        Ok(year) if YEAR_RANGE.contains(&year) => Ok(Some(year)),
        _ => Err(TrackRecordError::InvalidYear {
            line,
            value: value.to_string(),
        }),
    }
}

pub(crate) fn parse_date_year(line: usize, cell: &str) -> Result<Option<i32>> {
    let Some(value) = non_blank(cell) else {
        return Ok(None);
    };

    let year = ["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        // Month precision ("2016-05")
        .or_else(|| NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d").ok())
        .map(|date| date.year())
        .or_else(|| {
            (value.len() == 4)
                .then(|| value.parse::<i32>().ok())
                .flatten()
        });

    if let Some(year) = year.filter(|year| YEAR_RANGE.contains(year)) {
        return Ok(Some(year));
    }
    Err(TrackRecordError::InvalidDate {
        line,
        value: value.to_string(),
    })
}

pub(crate) fn parse_citations(line: usize, cell: &str) -> Result<Option<u32>> {
    let Some(value) = non_blank(cell) else {
        return Ok(None);
    };
    strip_integral_suffix(value)
        .parse::<u32>()
        .map(Some)
        .map_err(|_| TrackRecordError::InvalidCitationCount {
            line,
            value: value.to_string(),
        })
}

/// Parse "Surname, Given, Surname2, Given2, ..." into authors.
pub fn parse_alternating_authors(line: usize, cell: &str) -> Result<Vec<Author>> {
    let Some(value) = non_blank(cell) else {
        return Ok(Vec::new());
    };
    let malformed = |reason: String| TrackRecordError::MalformedAuthors {
        line,
        value: value.to_string(),
        reason,
    };

    let tokens: Vec<&str> = value.split(',').map(str::trim).collect();
    if tokens.len() % 2 != 0 {
        return Err(malformed(format!(
            "expected surname/given-name pairs, found {} comma-separated tokens",
            tokens.len()
        )));
    }

    tokens
        .chunks(2)
        .enumerate()
        .map(|(position, pair)| {
            if pair[0].is_empty() {
                return Err(malformed(format!("empty surname for author {}", position + 1)));
            }
            Ok(Author {
                surname: pair[0].to_string(),
                given: pair[1].to_string(),
            })
        })
        .collect()
}

/// Parse "Surname, Given and Surname2, Given2[, Given...]" into authors.
pub fn parse_and_separated_authors(line: usize, cell: &str) -> Result<Vec<Author>> {
    let Some(value) = non_blank(cell) else {
        return Ok(Vec::new());
    };
    let malformed = |reason: String| TrackRecordError::MalformedAuthors {
        line,
        value: value.to_string(),
        reason,
    };

    let normalised = value.split_whitespace().collect::<Vec<_>>().join(" ");
    normalised
        .split(" and ")
        .enumerate()
        .map(|(position, entry)| {
            let (surname, given) = entry
                .split_once(',')
                .ok_or_else(|| malformed(format!("author {} has no comma: '{}'", position + 1, entry)))?;
            let surname = surname.trim();
            if surname.is_empty() {
                return Err(malformed(format!("empty surname for author {}", position + 1)));
            }
            Ok(Author {
                surname: surname.to_string(),
                given: given.trim().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceFormat;

    #[test]
    fn test_alternating_authors() {
        let authors = parse_alternating_authors(1, "Crowe, S.B., Kairn ,T., Smith, J.").unwrap();
        let surnames: Vec<_> = authors.iter().map(|a| a.surname.as_str()).collect();
        assert_eq!(surnames, vec!["Crowe", "Kairn", "Smith"]);
        assert_eq!(authors[1].given, "T.");
    }

    #[test]
    fn test_alternating_authors_odd_tokens() {
        let err = parse_alternating_authors(7, "Crowe, S.B., Kairn").unwrap_err();
        match err {
            TrackRecordError::MalformedAuthors { line, reason, .. } => {
                assert_eq!(line, 7);
                assert!(reason.contains("3 comma-separated tokens"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_alternating_authors_empty_surname() {
        assert!(parse_alternating_authors(1, "Crowe, S., , T.").is_err());
    }

    #[test]
    fn test_blank_authors_is_empty() {
        assert!(parse_alternating_authors(1, "  ").unwrap().is_empty());
        assert!(parse_and_separated_authors(1, "").unwrap().is_empty());
    }

    #[test]
    fn test_and_separated_authors() {
        let authors = parse_and_separated_authors(
            1,
            "Crowe, Scott B. and Kairn, Tanya and\n  Trapp, Jamie V., Jr",
        )
        .unwrap();
        let surnames: Vec<_> = authors.iter().map(|a| a.surname.as_str()).collect();
        assert_eq!(surnames, vec!["Crowe", "Kairn", "Trapp"]);
        assert_eq!(authors[2].given, "Jamie V., Jr");
    }

    #[test]
    fn test_and_separated_keeps_names_containing_and() {
        let authors = parse_and_separated_authors(1, "Anderson, Ann and Sandoval, Andy").unwrap();
        assert_eq!(authors[0].surname, "Anderson");
        assert_eq!(authors[1].surname, "Sandoval");
    }

    #[test]
    fn test_and_separated_missing_comma() {
        assert!(parse_and_separated_authors(3, "Crowe, Scott and Kairn").is_err());
    }

    #[test]
    fn test_parse_year_and_citations() {
        assert_eq!(parse_year(1, "2016").unwrap(), Some(2016));
        assert_eq!(parse_year(1, "2016.0").unwrap(), Some(2016));
        assert_eq!(parse_year(1, "").unwrap(), None);
        assert!(parse_year(1, "twenty").is_err());
        assert!(parse_year(1, "-2147483648").is_err());
        assert!(parse_year(1, "20160").is_err());

        assert_eq!(parse_citations(1, "12").unwrap(), Some(12));
        assert_eq!(parse_citations(1, " ").unwrap(), None);
        assert!(parse_citations(1, "-3").is_err());
    }

    #[test]
    fn test_parse_date_year() {
        assert_eq!(parse_date_year(1, "2016-05-12").unwrap(), Some(2016));
        assert_eq!(parse_date_year(1, "12/05/2015").unwrap(), Some(2015));
        assert_eq!(parse_date_year(1, "2014-11").unwrap(), Some(2014));
        assert_eq!(parse_date_year(1, "2013").unwrap(), Some(2013));
        assert_eq!(parse_date_year(1, "").unwrap(), None);
        assert!(parse_date_year(1, "May 2016").is_err());
        assert!(parse_date_year(1, "+12016-01-01").is_err());
    }

    #[test]
    fn test_from_table() {
        let csv = "Authors,Year,Source title,Cited by\n\
                   \"Crowe, S., Kairn, T.\",2014,Med Phys,5\n\
                   \"Kairn, T.\",,PMB,\n";
        let table = RawTable::from_reader(csv.as_bytes()).unwrap();
        let columns = ColumnMap::from_format(SourceFormat::Scopus);
        let records = RecordSet::from_table(&table, &columns).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records.as_slice()[0].year, Some(2014));
        assert_eq!(records.as_slice()[0].citations, Some(5));
        assert_eq!(records.as_slice()[1].year, None);
        assert_eq!(records.as_slice()[1].citations, None);
        assert_eq!(records.venues().collect::<Vec<_>>(), vec!["Med Phys", "PMB"]);
    }

    #[test]
    fn test_from_table_reports_source_line() {
        let csv = "Authors,Year,Source title,Cited by\n\
                   \"Crowe, S.\",2014,Med Phys,5\n\
                   \"Crowe, S.\",20x4,Med Phys,5\n";
        let table = RawTable::from_reader(csv.as_bytes()).unwrap();
        let err = RecordSet::from_table(&table, &ColumnMap::default()).unwrap_err();
        assert!(matches!(err, TrackRecordError::InvalidYear { line: 3, .. }));
    }

    #[test]
    fn test_error_line_skips_blank_rows() {
        let csv = "Authors,Year,Source title,Cited by\n\
                   \"Crowe, S., Kairn, T.\",2014,PMB,1\n\
                   ,,,\n\
                   \"Crowe, S., Kairn\",2015,PMB,2\n";
        let table = RawTable::from_reader(csv.as_bytes()).unwrap();
        let err = RecordSet::from_table(&table, &ColumnMap::default()).unwrap_err();
        match err {
            TrackRecordError::MalformedAuthors { line, value, .. } => {
                assert_eq!(line, 4);
                assert_eq!(value, "Crowe, S., Kairn");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
