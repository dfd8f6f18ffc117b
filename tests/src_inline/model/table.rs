use super::*;
use crate::model::{Dataset, Model, TaskKind};

fn table_with(values: &[(u32, f64)]) -> MetricsTable {
    let mut table = MetricsTable::new(
        TaskKind::Gen,
        Model::GptJ,
        Dataset::Counterfact,
        vec!["score".to_string()],
    );
    for &(layer, v) in values {
        table.rows.push(ScoreRow::new(layer).with("score", v));
    }
    table
}

#[test]
fn test_stem_uses_keys() {
    let table = table_with(&[]);
    assert_eq!(table.stem(), "layers_gen_gptj_counterfact");

    let ent = MetricsTable::new(TaskKind::Ent, Model::Gpt2Xl, Dataset::Mcrae, Vec::new());
    assert_eq!(ent.stem(), "layers_ent_gpt2-xl_mcrae");
}

#[test]
fn test_best_by_prefers_lowest_layer_on_tie() {
    let table = table_with(&[(0, 0.2), (1, 0.5), (2, 0.5), (3, 0.1)]);
    assert_eq!(table.best_by("score"), Some((1, 0.5)));
    assert_eq!(table.best_by("missing"), None);
}

#[test]
fn test_row_accessors() {
    let mut row = ScoreRow::new(4).with("f1", 0.3);
    row.set("mcc", -0.1);
    assert_eq!(row.get("f1"), Some(0.3));
    assert_eq!(row.get("mcc"), Some(-0.1));
    assert_eq!(row.get("score"), None);
}
