use std::path::{Path, PathBuf};

use crate::model::{Dataset, TaskKind};

#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("missing results directory: {}", .path.display())]
    MissingResults { path: PathBuf },

    #[error("malformed metrics in {}: {reason}", .path.display())]
    MalformedMetrics { path: PathBuf, reason: String },

    #[error(
        "degenerate score at layer {layer}: {column} = {value} (harmonic mean needs positive inputs)"
    )]
    DegenerateScore {
        layer: u32,
        column: String,
        value: f64,
    },

    #[error("{task} results are not defined for dataset {dataset}")]
    UnsupportedDataset { task: TaskKind, dataset: Dataset },

    #[error("failed to list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AggregateError {
    pub fn malformed(path: &Path, reason: impl Into<String>) -> Self {
        AggregateError::MalformedMetrics {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn is_missing_results(&self) -> bool {
        matches!(self, AggregateError::MissingResults { .. })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render {}: {source}", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
