//! Integration tests for the data-quality pipeline.
//!
//! These tests verify end-to-end behavior over in-memory frames and over
//! the fixture files in `tests/fixtures/`.

use nullgate::{
    loader::{self, TableSource},
    CsvSource, JsonSource, Pipeline, PipelineConfig, PipelineResult,
};
use polars::prelude::*;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn dirty_sales_frame() -> DataFrame {
    df![
        "Transaction ID #" => [Some(1i64), Some(2), None],
        "Monto $$" => [Some(100.0f64), None, Some(300.0)],
        "¿Es_Fraude?" => [Some(0i64), Some(1), None],
    ]
    .unwrap()
}

fn run_pipeline(df: &DataFrame, threshold: f64) -> PipelineResult {
    Pipeline::builder()
        .config(
            PipelineConfig::builder()
                .null_threshold(threshold)
                .print_report(false)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
        .process(df)
        .unwrap()
}

fn flag_values(df: &DataFrame, name: &str) -> Vec<u32> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .u32()
        .unwrap()
        .into_no_null_iter()
        .collect()
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|s| s.to_string())
        .collect()
}

// ============================================================================
// End-to-End Pipeline Behavior
// ============================================================================

#[test]
fn test_dirty_sales_within_generous_threshold() {
    let source = dirty_sales_frame();

    let result = run_pipeline(&source, 0.4);

    assert_eq!(
        column_names(&result.df),
        vec![
            "transaction_id",
            "monto",
            "es_fraude",
            "transaction_id_nan",
            "monto_nan",
            "es_fraude_nan",
        ]
    );

    // one null per column, flagged at the right row
    assert_eq!(flag_values(&result.df, "transaction_id_nan"), vec![0, 0, 1]);
    assert_eq!(flag_values(&result.df, "monto_nan"), vec![0, 1, 0]);
    assert_eq!(flag_values(&result.df, "es_fraude_nan"), vec![0, 0, 1]);

    // each column sits at one third nulls, within a 40% threshold
    for name in ["transaction_id_nan", "monto_nan", "es_fraude_nan"] {
        let pct = result.report.percentage(name).unwrap();
        assert!((pct - 100.0 / 3.0).abs() < 1e-9, "{name} was {pct}");
    }
    assert!(result.report.is_clean());
    assert!(result.report.over_threshold_columns().is_empty());
}

#[test]
fn test_dirty_sales_over_tight_threshold() {
    let source = dirty_sales_frame();

    let result = run_pipeline(&source, 0.1);

    // 33.33% > 10% for every column; the structured report carries the
    // classification and the caller escalates
    assert!(!result.report.is_clean());
    assert_eq!(
        result.report.over_threshold_columns(),
        vec!["transaction_id_nan", "monto_nan", "es_fraude_nan"]
    );
    for stat in &result.report.columns {
        assert!(stat.over_threshold);
    }
}

#[test]
fn test_row_count_invariant_and_caller_frame_untouched() {
    let source = dirty_sales_frame();
    let before = source.clone();

    let result = run_pipeline(&source, 0.4);

    assert_eq!(result.df.height(), before.height());
    assert_eq!(column_names(&source), column_names(&before));
    assert_eq!(source.width(), 3);
}

#[test]
fn test_canonical_collision_fails_fast() {
    let source = df![
        "Monto $$" => [1i64, 2],
        "monto" => [3i64, 4],
    ]
    .unwrap();

    let err = Pipeline::builder()
        .build()
        .unwrap()
        .process(&source)
        .unwrap_err();

    assert!(err.is_contract_violation());
    assert!(err.to_string().contains("monto"));
}

#[test]
fn test_already_canonical_names_pass_through() {
    let source = df![
        "amount" => [Some(1.0f64), None],
        "label" => [Some("a"), Some("b")],
    ]
    .unwrap();

    let result = run_pipeline(&source, 0.6);

    assert_eq!(
        column_names(&result.df),
        vec!["amount", "label", "amount_nan", "label_nan"]
    );
}

// ============================================================================
// Fixture Files
// ============================================================================

#[test]
fn test_csv_fixture_end_to_end() {
    let df = CsvSource::new(fixtures_path().join("dirty_sales.csv"))
        .load()
        .unwrap();
    assert_eq!(df.shape(), (4, 4));

    let result = run_pipeline(&df, 0.4);

    // "" and "NaN" tokens both count as missing for the name column
    assert_eq!(
        result.report.percentage("nombre_cliente_raw_nan"),
        Some(50.0)
    );
    assert_eq!(result.report.percentage("monto_nan"), Some(25.0));
    assert_eq!(result.report.percentage("es_fraude_nan"), Some(25.0));
    assert_eq!(result.report.percentage("transaction_id_nan"), Some(0.0));

    assert_eq!(
        result.report.over_threshold_columns(),
        vec!["nombre_cliente_raw_nan"]
    );
}

#[test]
fn test_json_fixture_end_to_end() {
    let df = JsonSource::new(fixtures_path().join("dirty_sales.json"))
        .load()
        .unwrap();
    assert_eq!(df.shape(), (3, 3));

    let result = run_pipeline(&df, 0.5);

    assert!(result.report.is_clean());
    let pct = result.report.percentage("monto_nan").unwrap();
    assert!((pct - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_extension_dispatch_loads_both_fixtures() {
    let csv = loader::load_table(fixtures_path().join("dirty_sales.csv")).unwrap();
    let json = loader::load_table(fixtures_path().join("dirty_sales.json")).unwrap();

    assert_eq!(csv.height(), 4);
    assert_eq!(json.height(), 3);
}
