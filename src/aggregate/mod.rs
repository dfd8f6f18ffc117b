pub mod classification;
pub mod entailment;
pub mod generation;
pub mod profiles;
pub mod score;

use crate::config::{Settings, ZeroScorePolicy};
use crate::error::AggregateError;
use crate::input::{ResultsLayout, ResultsSource};
use crate::model::{Dataset, MetricsTable, Model, TaskKind};

/// Turns per-layer metric files into layer-ordered score tables.
///
/// Holds no state between calls: every aggregation re-reads the results
/// tree through `source`.
pub struct Aggregator<'a> {
    pub source: &'a dyn ResultsSource,
    pub layout: ResultsLayout,
    pub zero_scores: ZeroScorePolicy,
}

impl<'a> Aggregator<'a> {
    pub fn new(
        source: &'a dyn ResultsSource,
        layout: ResultsLayout,
        zero_scores: ZeroScorePolicy,
    ) -> Self {
        Self {
            source,
            layout,
            zero_scores,
        }
    }

    pub fn from_settings(source: &'a dyn ResultsSource, settings: &Settings) -> Self {
        Self::new(
            source,
            ResultsLayout::new(&settings.results_root, settings.prefixes.clone()),
            settings.zero_scores,
        )
    }

    pub fn aggregate(
        &self,
        task: TaskKind,
        model: Model,
        dataset: Dataset,
    ) -> Result<MetricsTable, AggregateError> {
        match task {
            TaskKind::Gen => self.aggregate_generation(model, dataset),
            TaskKind::Class => self.aggregate_classification(model, dataset),
            TaskKind::Ent => {
                if dataset != Dataset::Mcrae {
                    return Err(AggregateError::UnsupportedDataset { task, dataset });
                }
                self.aggregate_entailment(model)
            }
        }
    }
}
