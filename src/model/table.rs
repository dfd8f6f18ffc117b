use std::collections::BTreeMap;

use crate::model::ids::{Dataset, Model, TaskKind};

pub const LAYER_COLUMN: &str = "layer";

/// One layer's values, keyed by column name.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub layer: u32,
    pub values: BTreeMap<String, f64>,
}

impl ScoreRow {
    pub fn new(layer: u32) -> Self {
        Self {
            layer,
            values: BTreeMap::new(),
        }
    }

    pub fn with(mut self, column: &str, value: f64) -> Self {
        self.values.insert(column.to_string(), value);
        self
    }

    pub fn set(&mut self, column: &str, value: f64) {
        self.values.insert(column.to_string(), value);
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.values.get(column).copied()
    }
}

/// Layer-ordered score table for one (task, model, dataset) triple.
///
/// `columns` lists the value columns in display order and never contains
/// [`LAYER_COLUMN`]; writers emit the layer first.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsTable {
    pub task: TaskKind,
    pub model: Model,
    pub dataset: Dataset,
    pub columns: Vec<String>,
    pub rows: Vec<ScoreRow>,
}

impl MetricsTable {
    pub fn new(task: TaskKind, model: Model, dataset: Dataset, columns: Vec<String>) -> Self {
        Self {
            task,
            model,
            dataset,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn layers(&self) -> Vec<u32> {
        self.rows.iter().map(|r| r.layer).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Output file stem, e.g. `layers_gen_gptj_counterfact`.
    pub fn stem(&self) -> String {
        format!(
            "layers_{}_{}_{}",
            self.task.key(),
            self.model.key(),
            self.dataset.key()
        )
    }

    /// Highest value of `column`; ties go to the lowest layer.
    pub fn best_by(&self, column: &str) -> Option<(u32, f64)> {
        let mut best: Option<(u32, f64)> = None;
        for row in &self.rows {
            let Some(v) = row.get(column) else {
                continue;
            };
            match best {
                Some((_, b)) if v <= b => {}
                _ => best = Some((row.layer, v)),
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/table.rs"]
mod tests;
