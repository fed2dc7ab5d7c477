// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;

pub use args::Args;
pub use output::{format_json, format_summary};

use anyhow::{Context, Result};
use log::info;

use crate::config::SourceFormat;
use crate::core::{AnalyzerBuilder, EPrintAnalyzer};
use crate::report::TrackRecordSummary;

/// Run the CLI with parsed arguments
pub fn run(args: &Args) -> Result<()> {
    args.validate()?;
    let columns = args.column_map().context("Failed to load column map")?;
    let options = args.summary_options();
    let source = args.input.display().to_string();

    let summary = match args.format {
        SourceFormat::Scopus => {
            let analyzer = AnalyzerBuilder::new()
                .columns(columns)
                .build(&args.input)
                .with_context(|| format!("Failed to load {}", source))?;

            if let Some(dir) = &args.plot_dir {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
                analyzer
                    .plot_differential_publication_histogram(
                        !args.no_moving_average,
                        &dir.join("differential.png"),
                    )
                    .context("Failed to plot differential histogram")?;
                analyzer
                    .plot_cumulative_publication_histogram(&dir.join("cumulative.png"))
                    .context("Failed to plot cumulative histogram")?;
                info!("plots written to {}", dir.display());
            }

            TrackRecordSummary::from_analyzer(source, &analyzer, &options)
        }
        SourceFormat::EPrint => {
            let analyzer = EPrintAnalyzer::with_columns(&args.input, &columns)
                .with_context(|| format!("Failed to load {}", source))?;
            TrackRecordSummary::from_eprint(source, &analyzer, &options)
        }
    };

    if args.json {
        println!("{}", format_json(&summary)?);
    } else {
        print!("{}", format_summary(&summary, args.verbose));
    }
    Ok(())
}
