use std::path::Path;

use serde_json::json;

use super::*;
use crate::config::ZeroScorePolicy;
use crate::fixtures::{RecordingSource, layout, make_temp_dir, write_json, write_text};
use crate::input::LocalFs;

fn write_counterfact_layer(dir: &Path, layer: u32, f1: f64, mcc: f64) {
    write_json(
        &dir.join(format!("entity_layer_{layer}_metrics.json")),
        &json!({"contextual": {"f1": f1, "mcc": mcc}, "decontextual": {"f1": 0.0, "mcc": 0.0}}),
    );
}

#[test]
fn test_layer_from_file_name() {
    assert_eq!(layer_from_file_name("entity_layer_3_metrics.json"), Some(3));
    assert_eq!(layer_from_file_name("attr_sub_layer_12_metrics.json"), Some(12));
    assert_eq!(layer_from_file_name("_layer_3_metrics.json"), None);
    assert_eq!(layer_from_file_name("entity_layer_x_metrics.json"), None);
    assert_eq!(layer_from_file_name("entity_layer_3_metrics.json.bak"), None);
    assert_eq!(layer_from_file_name("train-class.json"), None);
    assert_eq!(
        layer_from_file_name("x_layer_4000000000_metrics.json"),
        Some(4_000_000_000)
    );
}

#[test]
fn test_zero_fills_layers_below_minimum() {
    let root = make_temp_dir();
    let linear = root.join("class_counterfact_gptj").join("linear");
    let first = linear.join("3");
    write_counterfact_layer(&first, 5, 0.7, 0.5);
    write_counterfact_layer(&first, 3, 0.6, 0.4);
    write_counterfact_layer(&first, 4, 0.65, 0.45);
    write_text(&first.join("weights.pth"), "binary");
    // later layer directories are never consulted
    write_counterfact_layer(&linear.join("9"), 1, 0.99, 0.99);

    let agg = Aggregator::new(&LocalFs, layout(&root), ZeroScorePolicy::Error);
    let table = agg
        .aggregate_classification(Model::GptJ, Dataset::Counterfact)
        .unwrap();

    assert_eq!(table.columns, vec!["f1", "mcc"]);
    assert_eq!(table.layers(), vec![0, 1, 2, 3, 4, 5]);
    for row in &table.rows[..3] {
        assert_eq!(row.get("f1"), Some(0.0));
        assert_eq!(row.get("mcc"), Some(0.0));
    }
    assert_eq!(table.rows[3].get("f1"), Some(0.6));
    assert_eq!(table.rows[3].get("mcc"), Some(0.4));
    assert_eq!(table.rows[5].get("f1"), Some(0.7));
}

#[test]
fn test_biosbias_reads_top_level_fields() {
    let root = make_temp_dir();
    let first = root.join("class_biosbias_gpt2").join("linear").join("0");
    write_json(
        &first.join("bio_layer_0_metrics.json"),
        &json!({"f1": 0.81, "mcc": 0.62}),
    );
    write_json(
        &first.join("bio_layer_1_metrics.json"),
        &json!({"f1": 0.83, "mcc": 0.66}),
    );

    let agg = Aggregator::new(&LocalFs, layout(&root), ZeroScorePolicy::Error);
    let table = agg
        .aggregate_classification(Model::Gpt2, Dataset::Biosbias)
        .unwrap();
    assert_eq!(table.layers(), vec![0, 1]);
    assert_eq!(table.rows[0].get("f1"), Some(0.81));
    assert_eq!(table.rows[1].get("mcc"), Some(0.66));
}

#[test]
fn test_counterfact_schema_on_biosbias_file_is_malformed() {
    let root = make_temp_dir();
    let first = root.join("class_biosbias_gptj").join("linear").join("0");
    write_counterfact_layer(&first, 0, 0.5, 0.5);

    let agg = Aggregator::new(&LocalFs, layout(&root), ZeroScorePolicy::Error);
    assert!(matches!(
        agg.aggregate_classification(Model::GptJ, Dataset::Biosbias),
        Err(AggregateError::MalformedMetrics { .. })
    ));
}

#[test]
fn test_duplicate_layer_index_is_malformed() {
    let root = make_temp_dir();
    let first = root.join("class_counterfact_gptj").join("linear").join("0");
    write_counterfact_layer(&first, 2, 0.5, 0.5);
    write_json(
        &first.join("attribute_layer_2_metrics.json"),
        &json!({"contextual": {"f1": 0.1, "mcc": 0.1}}),
    );

    let agg = Aggregator::new(&LocalFs, layout(&root), ZeroScorePolicy::Error);
    assert!(matches!(
        agg.aggregate_classification(Model::GptJ, Dataset::Counterfact),
        Err(AggregateError::MalformedMetrics { .. })
    ));
}

#[test]
fn test_no_metric_files_gives_empty_table() {
    let root = make_temp_dir();
    let first = root.join("class_counterfact_gptj").join("linear").join("0");
    write_text(&first.join("train-class.json"), "{}");

    let agg = Aggregator::new(&LocalFs, layout(&root), ZeroScorePolicy::Error);
    let table = agg
        .aggregate_classification(Model::GptJ, Dataset::Counterfact)
        .unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_missing_results_dir_reads_nothing() {
    let root = make_temp_dir();
    let source = RecordingSource::default();
    let agg = Aggregator::new(&source, layout(&root), ZeroScorePolicy::Error);
    let err = agg
        .aggregate_classification(Model::GptJ, Dataset::Counterfact)
        .unwrap_err();
    assert!(err.is_missing_results());
    assert!(source.listed.borrow().is_empty());
    assert!(source.read.borrow().is_empty());
}

#[test]
fn test_absurd_layer_index_is_malformed() {
    let root = make_temp_dir();
    let first = root.join("class_counterfact_gptj").join("linear").join("0");
    write_counterfact_layer(&first, 2, 0.5, 0.5);
    let stray = first.join("x_layer_4000000000_metrics.json");
    write_json(&stray, &json!({"contextual": {"f1": 0.1, "mcc": 0.1}}));

    let agg = Aggregator::new(&LocalFs, layout(&root), ZeroScorePolicy::Error);
    match agg.aggregate_classification(Model::GptJ, Dataset::Counterfact) {
        Err(AggregateError::MalformedMetrics { path, reason }) => {
            assert_eq!(path, stray);
            assert!(reason.contains("exceeds"), "{reason}");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_layer_at_limit_is_accepted() {
    let root = make_temp_dir();
    let first = root.join("class_biosbias_gpt2").join("linear").join("0");
    write_json(
        &first.join(format!("bio_layer_{MAX_LAYER_INDEX}_metrics.json")),
        &json!({"f1": 0.5, "mcc": 0.2}),
    );

    let agg = Aggregator::new(&LocalFs, layout(&root), ZeroScorePolicy::Error);
    let table = agg
        .aggregate_classification(Model::Gpt2, Dataset::Biosbias)
        .unwrap();
    assert_eq!(table.rows.len(), MAX_LAYER_INDEX as usize + 1);
}

#[test]
fn test_repeated_calls_are_identical() {
    let root = make_temp_dir();
    let first = root.join("class_counterfact_gptj").join("linear").join("2");
    write_counterfact_layer(&first, 2, 0.6, 0.4);
    write_counterfact_layer(&first, 3, 0.7, 0.5);

    let agg = Aggregator::new(&LocalFs, layout(&root), ZeroScorePolicy::Error);
    let a = agg
        .aggregate_classification(Model::GptJ, Dataset::Counterfact)
        .unwrap();
    let b = agg
        .aggregate_classification(Model::GptJ, Dataset::Counterfact)
        .unwrap();
    assert_eq!(a, b);
}
