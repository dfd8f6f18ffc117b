use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::aggregate::Aggregator;
use crate::aggregate::profiles::{F1_COLUMN, MCC_COLUMN, classification_profile};
use crate::error::AggregateError;
use crate::input::{discover_layers, load_document, require_dir};
use crate::model::{Dataset, MetricsTable, Model, ScoreRow, TaskKind};

fn layer_file_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\w+_layer_(\d+)_metrics\.json$").expect("layer file pattern is valid")
    })
}

/// Highest layer index accepted from a file name; backfill runs from 0.
pub const MAX_LAYER_INDEX: u64 = 4096;

/// Layer index embedded in a `<name>_layer_<N>_metrics.json` file name.
pub fn layer_from_file_name(name: &str) -> Option<u64> {
    layer_file_pattern()
        .captures(name)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

impl Aggregator<'_> {
    /// F1/MCC per layer from the first layer directory's
    /// `*_layer_<N>_metrics.json` files.
    ///
    /// Layers below the lowest discovered one are filled with zero rows.
    pub fn aggregate_classification(
        &self,
        model: Model,
        dataset: Dataset,
    ) -> Result<MetricsTable, AggregateError> {
        let profile =
            classification_profile(dataset).ok_or(AggregateError::UnsupportedDataset {
                task: TaskKind::Class,
                dataset,
            })?;

        let results_dir = self.layout.results_dir(TaskKind::Class, dataset, model);
        require_dir(self.source, &results_dir)?;
        let linear_dir = self.layout.linear_dir(&results_dir, &[]);
        require_dir(self.source, &linear_dir)?;

        let columns = vec![F1_COLUMN.to_string(), MCC_COLUMN.to_string()];
        let mut table = MetricsTable::new(TaskKind::Class, model, dataset, columns);

        let layers = discover_layers(self.source, &linear_dir)?;
        let Some(first) = layers.first() else {
            warn!("no layer directories under {}", linear_dir.display());
            return Ok(table);
        };

        let entries = self
            .source
            .list_dir(&first.path)
            .map_err(|source| AggregateError::Io {
                path: first.path.clone(),
                source,
            })?;

        let mut found: BTreeMap<u32, PathBuf> = BTreeMap::new();
        for entry in entries {
            if entry.is_dir {
                continue;
            }
            let Some(layer) = layer_from_file_name(&entry.name) else {
                debug!("ignoring {}", entry.path.display());
                continue;
            };
            if layer > MAX_LAYER_INDEX {
                return Err(AggregateError::malformed(
                    &entry.path,
                    format!("layer index {layer} exceeds {MAX_LAYER_INDEX}"),
                ));
            }
            let layer = layer as u32;
            if let Some(previous) = found.insert(layer, entry.path.clone()) {
                return Err(AggregateError::malformed(
                    &entry.path,
                    format!(
                        "layer {layer} already provided by {}",
                        previous.display()
                    ),
                ));
            }
        }

        let Some(&min_layer) = found.keys().next() else {
            warn!("no layer metric files in {}", first.path.display());
            return Ok(table);
        };

        for layer in 0..min_layer {
            table.rows.push(
                ScoreRow::new(layer)
                    .with(F1_COLUMN, 0.0)
                    .with(MCC_COLUMN, 0.0),
            );
        }

        for (layer, path) in &found {
            let doc = load_document(self.source, path)?;
            table.rows.push(
                ScoreRow::new(*layer)
                    .with(F1_COLUMN, doc.number(profile.f1)?)
                    .with(MCC_COLUMN, doc.number(profile.mcc)?),
            );
        }

        info!(
            "classification {}/{}: {} layers ({} zero-filled) from {}",
            model,
            dataset,
            table.rows.len(),
            min_layer,
            first.path.display()
        );
        Ok(table)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/classification.rs"]
mod tests;
