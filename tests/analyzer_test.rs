// tests/analyzer_test.rs
//
// Library-level checks against the Scopus sample export.

mod test_utils;

use test_utils::fixture_path;
use trackrecord::{
    AnalyzerBuilder, Author, Record, RecordSet, TrackRecordAnalyzer, TrackRecordError,
};

fn sample() -> TrackRecordAnalyzer {
    TrackRecordAnalyzer::new(fixture_path("scopus_sample.csv")).expect("sample export loads")
}

#[test]
fn test_reference_counts() {
    let analyzer = sample();
    assert_eq!(analyzer.records().len(), 12);
    assert_eq!(analyzer.annual_output(None).len(), 7);
    assert_eq!(analyzer.total_output(2012, 5), 9);
    assert_eq!(analyzer.coauthor_count(None).len(), 5);
    assert_eq!(analyzer.h_index(), 5);
    assert_eq!(analyzer.journal_count().len(), 5);
}

#[test]
fn test_annual_output_matches_dated_records() {
    let analyzer = sample();
    let dated = analyzer.records().iter().filter(|r| r.year.is_some()).count();
    assert_eq!(analyzer.annual_output(None).total(), dated);

    let ranked: Vec<i32> = analyzer.annual_output(None).keys().copied().collect();
    assert_eq!(ranked, vec![2012, 2013, 2014, 2016, 2011, 2015, 2017]);
}

#[test]
fn test_annual_output_filter_keeps_requested_order() {
    let output = sample().annual_output(Some(&[2017, 2010, 2012]));
    assert_eq!(output.entries(), &[(2017, 1), (2012, 2)]);
}

#[test]
fn test_total_output_matches_annual_output() {
    let analyzer = sample();
    for start in 2009..2019 {
        for years in 0..6 {
            let expected: usize = analyzer
                .annual_output(None)
                .iter()
                .filter(|(year, _)| *year >= start && *year < start + years)
                .map(|(_, count)| count)
                .sum();
            assert_eq!(analyzer.total_output(start, years), expected);
        }
        assert_eq!(analyzer.total_output(start, 0), 0);
    }
}

#[test]
fn test_coauthors_exclude_analysed_author() {
    let analyzer = sample();
    let coauthors = analyzer.coauthor_count(None);
    assert!(!coauthors.contains(&"Crowe".to_string()));
    assert_eq!(
        coauthors.entries(),
        &[
            ("Kairn".to_string(), 6),
            ("Trapp".to_string(), 3),
            ("Kenny".to_string(), 2),
            ("Sylvander".to_string(), 2),
            ("Lancaster".to_string(), 1),
        ]
    );
    for limit in 0..8 {
        assert!(analyzer.coauthor_count(Some(limit)).len() <= limit);
    }
}

#[test]
fn test_journal_ranking() {
    let journals = sample().journal_count();
    let names: Vec<&str> = journals.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec![
            "Medical Physics",
            "Physics in Medicine and Biology",
            "Radiation Measurements",
            "Australasian Physical and Engineering Sciences in Medicine",
            "Journal of Applied Clinical Medical Physics",
        ]
    );
}

#[test]
fn test_h_index_monotonic_under_highly_cited_addition() {
    let analyzer = sample();
    let before = analyzer.h_index();

    let mut records: Vec<Record> = analyzer.records().as_slice().to_vec();
    records.push(Record {
        year: Some(2018),
        venue: Some("Medical Physics".to_string()),
        authors: vec![Author {
            surname: "Crowe".to_string(),
            given: "S.B.".to_string(),
        }],
        citations: Some(before + 1),
    });
    let extended = TrackRecordAnalyzer::from_records(RecordSet::new(records));

    assert!(extended.h_index() >= before);
}

#[test]
fn test_queries_do_not_change_results() {
    let analyzer = sample();
    let first = (
        analyzer.annual_output(None),
        analyzer.coauthor_count(Some(3)),
        analyzer.journal_count(),
        analyzer.h_index(),
        analyzer.total_output(2012, 5),
    );
    let second = (
        analyzer.annual_output(None),
        analyzer.coauthor_count(Some(3)),
        analyzer.journal_count(),
        analyzer.h_index(),
        analyzer.total_output(2012, 5),
    );
    assert_eq!(first, second);
}

#[test]
fn test_histogram_series() {
    let analyzer = sample();

    let plain = analyzer.differential_histogram(false);
    assert_eq!(plain.labels, (2011..=2017).collect::<Vec<_>>());
    assert_eq!(plain.values, vec![1.0, 2.0, 2.0, 2.0, 1.0, 2.0, 1.0]);

    let averaged = analyzer.differential_histogram(true);
    assert_eq!(averaged.len(), 7);
    assert_eq!(averaged.values[0], 1.0 / 5.0);
    assert_eq!(averaged.values[4], 8.0 / 5.0);
    assert_eq!(averaged.values[6], 8.0 / 5.0);

    let cumulative = analyzer.cumulative_histogram();
    assert_eq!(cumulative.values, vec![1.0, 3.0, 5.0, 7.0, 8.0, 10.0, 11.0]);
}

#[test]
fn test_plots_written() {
    let dir = tempfile::tempdir().unwrap();
    let analyzer = sample();

    let differential = dir.path().join("differential.png");
    let cumulative = dir.path().join("cumulative.png");
    analyzer
        .plot_differential_publication_histogram(true, &differential)
        .unwrap();
    analyzer.plot_cumulative_publication_histogram(&cumulative).unwrap();

    assert!(differential.metadata().unwrap().len() > 0);
    assert!(cumulative.metadata().unwrap().len() > 0);
}

#[test]
fn test_plot_without_dated_records_fails() {
    let analyzer = TrackRecordAnalyzer::from_records(RecordSet::new(vec![Record::default()]));
    let dir = tempfile::tempdir().unwrap();
    let result = analyzer.plot_cumulative_publication_histogram(&dir.path().join("empty.png"));
    assert!(matches!(result, Err(TrackRecordError::EmptyDataset)));
}

#[test]
fn test_malformed_authors_fail_loudly() {
    let result = TrackRecordAnalyzer::new(fixture_path("malformed_authors.csv"));
    match result {
        Err(TrackRecordError::MalformedAuthors { line, value, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(value, "Crowe, S.B., Kairn");
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("malformed author list was accepted"),
    }
}

#[test]
fn test_missing_file_fails() {
    let result = TrackRecordAnalyzer::new(fixture_path("does_not_exist.csv"));
    assert!(matches!(result, Err(TrackRecordError::Open { .. })));
}

#[test]
fn test_custom_column_map() {
    let columns = trackrecord::ColumnMap::from_json_file(&fixture_path("renamed_columns.json")).unwrap();
    let analyzer = AnalyzerBuilder::new()
        .columns(columns)
        .build(fixture_path("renamed_columns.csv"))
        .unwrap();

    assert_eq!(analyzer.h_index(), 1);
    assert_eq!(analyzer.coauthor_count(None).entries(), &[("Kairn".to_string(), 2)]);
}
