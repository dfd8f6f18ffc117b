use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{Dataset, Model, TaskKind};

/// What to do when a harmonic-mean input is not strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroScorePolicy {
    /// Fail the aggregation with a degenerate-score error.
    #[default]
    Error,
    /// Score the layer as 0.0.
    Zero,
}

/// Results directory prefixes, one per task family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirPrefixes {
    #[serde(rename = "gen")]
    pub generation: String,
    #[serde(rename = "class")]
    pub classification: String,
    #[serde(rename = "ent")]
    pub entailment: String,
}

impl Default for DirPrefixes {
    fn default() -> Self {
        Self {
            generation: TaskKind::Gen.key().to_string(),
            classification: TaskKind::Class.key().to_string(),
            entailment: TaskKind::Ent.key().to_string(),
        }
    }
}

impl DirPrefixes {
    pub fn for_task(&self, task: TaskKind) -> &str {
        match task {
            TaskKind::Gen => &self.generation,
            TaskKind::Class => &self.classification,
            TaskKind::Ent => &self.entailment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub results_root: PathBuf,
    pub out_dir: PathBuf,
    pub prefixes: DirPrefixes,
    /// Display names keyed by model key (`gptj`, `gpt2-xl`, ...).
    pub model_names: BTreeMap<String, String>,
    /// Display names keyed by dataset key.
    pub dataset_names: BTreeMap<String, String>,
    pub zero_scores: ZeroScorePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            results_root: PathBuf::from("results"),
            out_dir: PathBuf::from("figures"),
            prefixes: DirPrefixes::default(),
            model_names: BTreeMap::new(),
            dataset_names: BTreeMap::new(),
            zero_scores: ZeroScorePolicy::default(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn model_name(&self, model: Model) -> String {
        self.model_names
            .get(model.key())
            .cloned()
            .unwrap_or_else(|| model.default_display_name().to_string())
    }

    pub fn dataset_name(&self, dataset: Dataset) -> String {
        self.dataset_names
            .get(dataset.key())
            .cloned()
            .unwrap_or_else(|| dataset.default_display_name().to_string())
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
