//! Output formatting for CLI results

use colorful::Colorful;

use crate::core::FrequencyTable;
use crate::report::TrackRecordSummary;

/// Format a summary for terminal output
pub fn format_summary(summary: &TrackRecordSummary, verbose: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} [{}]\n",
        summary.source.clone().bold(),
        summary.format.name()
    ));
    output.push_str(&format!("  Records: {}\n", summary.record_count));

    if let Some(h_index) = summary.h_index {
        output.push_str(&format!("  h-index: {}\n", h_index.to_string().green()));
    }

    if let Some(total) = &summary.total_output {
        output.push_str(&format!(
            "  Publications {}: {}\n",
            window_label(total.start_year, total.number_of_years),
            total.publications
        ));
    }

    output.push_str("\n  Annual output:\n");
    output.push_str(&format_table(&summary.annual_output, None));

    let coauthor_rows = if verbose { None } else { Some(10) };
    output.push_str(&format!("\n  Co-authors ({}):\n", summary.coauthors.len()));
    output.push_str(&format_table(&summary.coauthors, coauthor_rows));

    if let Some(journals) = &summary.journals {
        output.push_str(&format!("\n  Journals ({}):\n", journals.len()));
        output.push_str(&format_table(journals, None));
    }

    output
}

/// "2012-2016" for a five-year window starting 2012
fn window_label(start_year: i32, number_of_years: i32) -> String {
    if number_of_years <= 0 {
        return "(empty window)".to_string();
    }
    match start_year.checked_add(number_of_years - 1) {
        Some(last_year) if last_year == start_year => start_year.to_string(),
        Some(last_year) => format!("{}-{}", start_year, last_year),
        None => format!("{} onward", start_year),
    }
}

/// One indented "key  count" line per entry, at most `max_rows` lines
fn format_table<K: ToString>(table: &FrequencyTable<K>, max_rows: Option<usize>) -> String {
    if table.is_empty() {
        return format!("    {}\n", "(none)".dim());
    }

    let shown = max_rows.unwrap_or(table.len()).min(table.len());
    let rows: Vec<(String, usize)> = table
        .iter()
        .take(shown)
        .map(|(key, count)| (key.to_string(), *count))
        .collect();
    let width = rows.iter().map(|(key, _)| key.chars().count()).max().unwrap_or(0);

    let mut output = String::new();
    for (key, count) in rows {
        output.push_str(&format!("    {:<width$}  {}\n", key, count, width = width));
    }
    if shown < table.len() {
        output.push_str(&format!(
            "    {}\n",
            format!("... {} more (use --verbose)", table.len() - shown).dim()
        ));
    }
    output
}

/// Format a summary as JSON
pub fn format_json(summary: &TrackRecordSummary) -> serde_json::Result<String> {
    summary.to_json()
}
