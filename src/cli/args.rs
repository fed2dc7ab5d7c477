//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ColumnMap, SourceFormat};
use crate::core::{DEFAULT_NUMBER_OF_YEARS, DEFAULT_START_YEAR};
use crate::error::{Result, TrackRecordError};
use crate::report::SummaryOptions;

#[derive(Parser, Debug)]
#[command(name = "trackrecord")]
#[command(about = "Summarise a publication track record from a Scopus or ePrints CSV export")]
pub struct Args {
    /// CSV export to analyse
    pub input: PathBuf,

    /// Export format (scopus, eprint)
    #[arg(short, long, default_value = "scopus", value_parser = parse_format)]
    pub format: SourceFormat,

    /// JSON file overriding the column names of the chosen format
    #[arg(short, long)]
    pub columns: Option<PathBuf>,

    /// First year counted by the total output
    #[arg(long, default_value_t = DEFAULT_START_YEAR, allow_hyphen_values = true)]
    pub start_year: i32,

    /// Number of years counted by the total output
    #[arg(long = "years", default_value_t = DEFAULT_NUMBER_OF_YEARS, allow_hyphen_values = true)]
    pub number_of_years: i32,

    /// Only report annual output for these years (repeatable, kept in order)
    #[arg(short = 'y', long = "year")]
    pub only_years: Vec<i32>,

    /// Maximum number of co-authors listed
    #[arg(short = 'n', long)]
    pub coauthor_limit: Option<usize>,

    /// Write differential.png and cumulative.png into this directory
    #[arg(short, long)]
    pub plot_dir: Option<PathBuf>,

    /// Plot raw yearly counts without the five-year moving average
    #[arg(long)]
    pub no_moving_average: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_format(name: &str) -> std::result::Result<SourceFormat, String> {
    SourceFormat::from_name(name).ok_or_else(|| {
        let known: Vec<_> = SourceFormat::all().iter().map(|f| f.name()).collect();
        format!("unknown format '{}' (expected one of: {})", name, known.join(", "))
    })
}

impl Args {
    /// Column map for the chosen format, or the override file if given
    pub fn column_map(&self) -> Result<ColumnMap> {
        match &self.columns {
            Some(path) => ColumnMap::from_json_file(path),
            None => Ok(ColumnMap::from_format(self.format)),
        }
    }

    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            years: (!self.only_years.is_empty()).then(|| self.only_years.clone()),
            start_year: self.start_year,
            number_of_years: self.number_of_years,
            coauthor_limit: self.coauthor_limit,
        }
    }

    /// Reject option combinations the chosen format cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.format == SourceFormat::EPrint && self.plot_dir.is_some() {
            return Err(TrackRecordError::Config(
                "plots are only available for Scopus exports".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("trackrecord").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["scopus.csv"]);
        assert_eq!(args.format, SourceFormat::Scopus);
        assert_eq!(args.start_year, 2012);
        assert_eq!(args.number_of_years, 5);
        assert!(args.summary_options().years.is_none());
        assert!(!args.no_moving_average);
    }

    #[test]
    fn test_parse_years_in_order() {
        let args = parse(&["-y", "2016", "--year", "2013", "--coauthor-limit", "10", "scopus.csv"]);
        let options = args.summary_options();
        assert_eq!(options.years, Some(vec![2016, 2013]));
        assert_eq!(options.coauthor_limit, Some(10));
    }

    #[test]
    fn test_parse_format() {
        let args = parse(&["--format", "eprints", "export.csv"]);
        assert_eq!(args.format, SourceFormat::EPrint);
        assert_eq!(args.column_map().unwrap(), ColumnMap::from_format(SourceFormat::EPrint));
    }

    #[test]
    fn test_unknown_format() {
        let result = Args::try_parse_from(["trackrecord", "--format", "wos", "export.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_eprint_plots_rejected() {
        let args = parse(&["--format", "eprint", "--plot-dir", "plots", "export.csv"]);
        assert!(args.validate().is_err());
        assert!(parse(&["--plot-dir", "plots", "scopus.csv"]).validate().is_ok());
    }
}
