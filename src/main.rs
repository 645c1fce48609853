//! CLI entry point for the data-quality pipeline.

use anyhow::{anyhow, Result};
use clap::Parser;
use nullgate::{loader, Pipeline, PipelineConfig};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Data-quality gate for tabular datasets",
    long_about = "Normalizes column names, derives per-column null flags, and reports\n\
                  null rates against a threshold.\n\n\
                  EXAMPLES:\n  \
                  # Report null rates with the default 5% threshold\n  \
                  nullgate -i sales.csv\n\n  \
                  # Custom threshold, write the augmented table\n  \
                  nullgate -i sales.csv -t 0.06 -o sales_flagged.csv\n\n  \
                  # Machine-readable report, fail the build on bad data\n  \
                  nullgate -i sales.json --json --strict"
)]
struct Args {
    /// Path to the dataset to check (CSV or JSON)
    #[arg(short, long)]
    input: String,

    /// Null-rate threshold as a fraction (0.0 - 1.0)
    #[arg(short, long, default_value = "0.05")]
    threshold: f64,

    /// Write the augmented table (normalized names + flag columns) as CSV
    #[arg(short, long)]
    output: Option<String>,

    /// Output the quality report as JSON to stdout instead of text
    ///
    /// Disables all logs; only the JSON report is written.
    #[arg(long)]
    json: bool,

    /// Exit with an error if any column is over the threshold
    #[arg(long)]
    strict: bool,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// stdout only contains the JSON report.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    info!("Loading dataset from: {}", args.input);
    let data = loader::load_table(Path::new(&args.input))?;
    info!("Dataset loaded: {:?}", data.shape());

    let config = PipelineConfig::builder()
        .null_threshold(args.threshold)
        .print_report(!args.json)
        .build()?;

    let result = Pipeline::builder().config(config).build()?.process(&data)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.report)?);
    }

    if let Some(ref output) = args.output {
        let mut df = result.df.clone();
        let mut file = File::create(output)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .with_separator(b',')
            .finish(&mut df)?;
        info!("Augmented table written to: {}", output);
    }

    if args.strict && !result.report.is_clean() {
        let over = result.report.over_threshold_columns().join(", ");
        return Err(anyhow!(
            "Null threshold {:.2}% exceeded by: {}",
            args.threshold * 100.0,
            over
        ));
    }

    Ok(())
}
