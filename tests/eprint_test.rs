// tests/eprint_test.rs
//
// ePrints export analysis.

mod test_utils;

use test_utils::fixture_path;
use trackrecord::{ColumnMap, EPrintAnalyzer, SourceFormat, TrackRecordError};

#[test]
fn test_annual_output_by_date_published() {
    let analyzer = EPrintAnalyzer::new(fixture_path("eprints_sample.csv")).unwrap();

    assert_eq!(analyzer.records().len(), 5);
    let output = analyzer.annual_output(None);
    assert_eq!(output.entries(), &[(2014, 2), (2015, 1), (2016, 1)]);
    assert_eq!(output.total(), 4);

    assert_eq!(analyzer.annual_output(Some(&[2016, 2014])).entries(), &[(2016, 1), (2014, 2)]);
    assert!(analyzer.annual_output(Some(&[])).is_empty());
}

#[test]
fn test_coauthor_count() {
    let analyzer = EPrintAnalyzer::new(fixture_path("eprints_sample.csv")).unwrap();
    let coauthors = analyzer.coauthor_count(None);

    assert_eq!(
        coauthors.entries(),
        &[
            ("Kairn".to_string(), 3),
            ("Trapp".to_string(), 2),
            ("Kenny".to_string(), 1),
        ]
    );
    assert_eq!(analyzer.coauthor_count(Some(2)).len(), 2);
}

#[test]
fn test_scopus_layout_rejected_for_eprint_columns() {
    let result = EPrintAnalyzer::with_columns(
        fixture_path("scopus_sample.csv"),
        &ColumnMap::from_format(SourceFormat::EPrint),
    );
    assert!(matches!(result, Err(TrackRecordError::MissingColumn { .. })));
}
