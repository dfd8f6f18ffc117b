use std::collections::BTreeSet;

use tracing::info;

use crate::aggregate::Aggregator;
use crate::aggregate::profiles::ENTAILMENT_FILE;
use crate::error::AggregateError;
use crate::input::{discover_layers, load_document, require_dir};
use crate::model::{Dataset, LAYER_COLUMN, MetricsTable, Model, ScoreRow, TaskKind};

impl Aggregator<'_> {
    /// Per-layer means from `entailment_metrics.json` on McRae.
    ///
    /// Columns are whatever metric names the files contain, unioned across
    /// layers and sorted by name.
    pub fn aggregate_entailment(&self, model: Model) -> Result<MetricsTable, AggregateError> {
        let dataset = Dataset::Mcrae;
        let results_dir = self.layout.results_dir(TaskKind::Ent, dataset, model);
        require_dir(self.source, &results_dir)?;
        let linear_dir = self.layout.linear_dir(&results_dir, &[]);
        require_dir(self.source, &linear_dir)?;

        let layers = discover_layers(self.source, &linear_dir)?;
        let mut rows = Vec::with_capacity(layers.len());
        let mut columns = BTreeSet::new();
        for layer_dir in &layers {
            let doc = load_document(self.source, &layer_dir.path.join(ENTAILMENT_FILE))?;
            let mut row = ScoreRow::new(layer_dir.layer);
            for (name, mean) in doc.mean_entries()? {
                if name == LAYER_COLUMN {
                    return Err(AggregateError::malformed(
                        &doc.path,
                        "metric name collides with the layer column",
                    ));
                }
                row.set(&name, mean);
                columns.insert(name);
            }
            rows.push(row);
        }

        let columns = columns.into_iter().collect();
        let mut table = MetricsTable::new(TaskKind::Ent, model, dataset, columns);
        table.rows = rows;

        info!(
            "entailment {}: {} layers, metrics [{}]",
            model,
            table.rows.len(),
            table.columns.join(", ")
        );
        Ok(table)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/entailment.rs"]
mod tests;
