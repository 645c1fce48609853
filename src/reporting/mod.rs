//! Report rendering.
//!
//! Presentation lives here, separated from the analysis that produces the
//! numbers: [`crate::quality::QualityAnalyzer`] returns structured data and
//! this module turns it into the fixed text format existing consumers parse.

use crate::types::QualityReport;
use std::io::{self, Write};
use tracing::warn;

/// Renders a [`QualityReport`] as plain text.
pub struct ReportRenderer;

impl ReportRenderer {
    /// Write the report to `out`.
    ///
    /// Format: a header line, one `name: percentage` line per flag column
    /// (name left-padded to 30 characters, percentage with two decimals),
    /// then one actionable message per over-threshold column, or a single
    /// all-clear message when every column is within the threshold.
    pub fn render<W: Write>(report: &QualityReport, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Null percentage report by column:")?;
        for column in &report.columns {
            writeln!(out, "{:<30}: {:.2}%", column.column, column.null_percentage)?;
        }
        writeln!(out)?;

        let threshold_pct = report.threshold * 100.0;
        let over: Vec<_> = report.columns.iter().filter(|c| c.over_threshold).collect();

        if over.is_empty() {
            writeln!(
                out,
                "All critical columns are within the allowed null threshold ({:.2}%). \
                 Proceeding with analysis of the current dataset is recommended.",
                threshold_pct
            )?;
        } else {
            for column in over {
                writeln!(
                    out,
                    "Critical column '{}' exceeds the null threshold ({:.2}%) with a rate of {:.2}%. \
                     Discarding the dataset and collecting new data for this column is recommended.",
                    column.column, threshold_pct, column.null_percentage
                )?;
            }
        }
        writeln!(out)?;

        Ok(())
    }

    /// Render the report to a string.
    pub fn render_to_string(report: &QualityReport) -> String {
        let mut buffer = Vec::new();
        // writing to a Vec<u8> cannot fail
        let _ = Self::render(report, &mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Write the report to standard output.
    pub fn print(report: &QualityReport) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = Self::render(report, &mut handle) {
            warn!("Failed to write quality report to stdout: {}", e);
        }
    }
}
