use crate::cleaner::FLAG_SUFFIX;
use crate::error::Result;
use crate::types::{FlagColumnStat, QualityReport};
use chrono::Local;
use polars::prelude::*;
use tracing::debug;

/// Computes null percentages and threshold classification for a table's
/// flag columns.
///
/// Pure computation: no output stream, no escalation. The returned
/// [`QualityReport`] carries both the percentages and an explicit
/// per-column over-threshold flag so the caller chooses whether to abort.
pub struct QualityAnalyzer;

impl QualityAnalyzer {
    /// Analyze every column whose name ends in `_nan`, in column order.
    ///
    /// Each flag column holds 0/1 values, so its mean is the fraction of
    /// null rows in the source column; the report stores it as a percentage.
    /// A column is over threshold when `percentage / 100` is strictly
    /// greater than `threshold`.
    pub fn analyze(df: &DataFrame, threshold: f64) -> Result<QualityReport> {
        let mut columns = Vec::new();

        for column in df.get_columns() {
            let name = column.name().as_str();
            if !name.ends_with(FLAG_SUFFIX) {
                continue;
            }

            let series = column.as_materialized_series();
            let fraction = series.cast(&DataType::Float64)?.mean().unwrap_or(0.0);
            let percentage = fraction * 100.0;

            columns.push(FlagColumnStat {
                column: name.to_string(),
                null_percentage: percentage,
                over_threshold: percentage / 100.0 > threshold,
            });
        }

        debug!(
            "Analyzed {} flag columns against threshold {:.2}%",
            columns.len(),
            threshold * 100.0
        );

        Ok(QualityReport {
            generated_at: Local::now().to_rfc3339(),
            threshold,
            columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_percentage_is_exact_share_of_ones() {
        let df = df![
            "a_nan" => [1u32, 0, 0, 0],
            "b_nan" => [1u32, 1, 0, 0],
        ]
        .unwrap();

        let report = QualityAnalyzer::analyze(&df, 0.5).unwrap();

        assert_eq!(report.percentage("a_nan"), Some(25.0));
        assert_eq!(report.percentage("b_nan"), Some(50.0));
    }

    #[test]
    fn test_percentage_independent_of_row_order() {
        let forward = df!["x_nan" => [1u32, 1, 0, 0, 0, 0]].unwrap();
        let shuffled = df!["x_nan" => [0u32, 0, 1, 0, 1, 0]].unwrap();

        let a = QualityAnalyzer::analyze(&forward, 0.05).unwrap();
        let b = QualityAnalyzer::analyze(&shuffled, 0.05).unwrap();

        assert_eq!(a.percentage("x_nan"), b.percentage("x_nan"));
    }

    #[test]
    fn test_threshold_comparison_is_strict() {
        // 25% nulls at a 0.25 threshold: equal, so within.
        let df = df!["y_nan" => [1u32, 0, 0, 0]].unwrap();

        let at_boundary = QualityAnalyzer::analyze(&df, 0.25).unwrap();
        assert!(at_boundary.is_clean());

        let below = QualityAnalyzer::analyze(&df, 0.2).unwrap();
        assert_eq!(below.over_threshold_columns(), vec!["y_nan"]);
    }

    #[test]
    fn test_non_flag_columns_are_ignored() {
        let df = df![
            "value" => [Some(1i64), None, Some(3)],
            "value_nan" => [0u32, 1, 0],
        ]
        .unwrap();

        let report = QualityAnalyzer::analyze(&df, 0.05).unwrap();

        assert_eq!(report.columns.len(), 1);
        assert_eq!(report.columns[0].column, "value_nan");
    }

    #[test]
    fn test_empty_table_yields_empty_report() {
        let df = df!["plain" => [1i64, 2]].unwrap();
        let report = QualityAnalyzer::analyze(&df, 0.05).unwrap();
        assert!(report.columns.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn test_report_records_threshold() {
        let df = df!["z_nan" => [0u32, 0]].unwrap();
        let report = QualityAnalyzer::analyze(&df, 0.4).unwrap();
        assert_eq!(report.threshold, 0.4);
    }
}
