use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::aggregate::Aggregator;
use crate::aggregate::profiles::{GenerationProfile, SCORE_COLUMN, generation_profile};
use crate::aggregate::score::harmonic_mean;
use crate::error::AggregateError;
use crate::input::{LayerDir, MetricDocument, discover_layers, load_document, require_dir};
use crate::model::{Dataset, MetricsTable, Model, ScoreRow, TaskKind};

impl Aggregator<'_> {
    /// Generation metrics per layer, scored by harmonic mean.
    ///
    /// The highest layer directory holds an aggregate entry and is never
    /// part of the table.
    pub fn aggregate_generation(
        &self,
        model: Model,
        dataset: Dataset,
    ) -> Result<MetricsTable, AggregateError> {
        let profile =
            generation_profile(dataset).ok_or(AggregateError::UnsupportedDataset {
                task: TaskKind::Gen,
                dataset,
            })?;

        let results_dir = self.layout.results_dir(TaskKind::Gen, dataset, model);
        require_dir(self.source, &results_dir)?;
        let linear_dir = self.layout.linear_dir(&results_dir, profile.segments);
        require_dir(self.source, &linear_dir)?;

        let mut layers = discover_layers(self.source, &linear_dir)?;
        if let Some(last) = layers.pop() {
            debug!("excluding last layer directory {}", last.path.display());
        }

        let mut table = MetricsTable::new(TaskKind::Gen, model, dataset, profile.columns());
        for layer_dir in &layers {
            table.rows.push(self.generation_row(profile, layer_dir)?);
        }

        info!(
            "generation {}/{}: {} layers from {}",
            model,
            dataset,
            table.rows.len(),
            linear_dir.display()
        );
        Ok(table)
    }

    fn generation_row(
        &self,
        profile: &GenerationProfile,
        layer_dir: &LayerDir,
    ) -> Result<ScoreRow, AggregateError> {
        let mut docs: BTreeMap<&str, MetricDocument> = BTreeMap::new();
        for &file in profile.files {
            let doc = load_document(self.source, &layer_dir.path.join(file))?;
            docs.insert(file, doc);
        }

        let mut row = ScoreRow::new(layer_dir.layer);
        for field in profile.fields {
            let doc = docs.get(field.file).ok_or_else(|| {
                AggregateError::malformed(
                    &layer_dir.path.join(field.file),
                    "file not loaded for this dataset",
                )
            })?;
            row.set(field.column, doc.number(field.key_path)?);
        }

        let mut inputs = Vec::with_capacity(profile.score_inputs.len());
        for &column in profile.score_inputs {
            let value = row.get(column).ok_or_else(|| {
                AggregateError::malformed(&layer_dir.path, format!("no column {column}"))
            })?;
            inputs.push((column, value));
        }
        let score = harmonic_mean(&inputs, self.zero_scores).map_err(|d| {
            AggregateError::DegenerateScore {
                layer: layer_dir.layer,
                column: d.column,
                value: d.value,
            }
        })?;
        row.set(SCORE_COLUMN, score);

        debug!("layer {} score {:.6}", layer_dir.layer, score);
        Ok(row)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/generation.rs"]
mod tests;
