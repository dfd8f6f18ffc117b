use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::DirPrefixes;
use crate::error::AggregateError;
use crate::input::ResultsSource;
use crate::model::{Dataset, Model, TaskKind};

pub const LINEAR_DIR: &str = "linear";

/// Maps (task, dataset, model) triples onto the results tree.
#[derive(Debug, Clone)]
pub struct ResultsLayout {
    pub root: PathBuf,
    pub prefixes: DirPrefixes,
}

impl ResultsLayout {
    pub fn new(root: impl Into<PathBuf>, prefixes: DirPrefixes) -> Self {
        Self {
            root: root.into(),
            prefixes,
        }
    }

    /// `<root>/<prefix>_<dataset>_<model>`
    pub fn results_dir(&self, task: TaskKind, dataset: Dataset, model: Model) -> PathBuf {
        self.root.join(format!(
            "{}_{}_{}",
            self.prefixes.for_task(task),
            dataset.key(),
            model.key()
        ))
    }

    /// The directory holding integer-named layer folders, with any
    /// dataset-specific segments inserted before `linear/`.
    pub fn linear_dir(&self, results_dir: &Path, segments: &[&str]) -> PathBuf {
        let mut path = results_dir.to_path_buf();
        for segment in segments {
            path.push(segment);
        }
        path.push(LINEAR_DIR);
        path
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerDir {
    pub layer: u32,
    pub path: PathBuf,
}

pub fn require_dir(source: &dyn ResultsSource, path: &Path) -> Result<(), AggregateError> {
    if source.is_dir(path) {
        Ok(())
    } else {
        Err(AggregateError::MissingResults {
            path: path.to_path_buf(),
        })
    }
}

/// Integer-named subdirectories of `linear_dir`, ascending by layer.
pub fn discover_layers(
    source: &dyn ResultsSource,
    linear_dir: &Path,
) -> Result<Vec<LayerDir>, AggregateError> {
    let entries = source
        .list_dir(linear_dir)
        .map_err(|source| AggregateError::Io {
            path: linear_dir.to_path_buf(),
            source,
        })?;

    let mut layers = Vec::with_capacity(entries.len());
    for entry in entries {
        if !entry.is_dir {
            debug!("skipping non-directory entry {}", entry.path.display());
            continue;
        }
        match entry.name.parse::<u32>() {
            Ok(layer) => layers.push(LayerDir {
                layer,
                path: entry.path,
            }),
            Err(_) => debug!("skipping non-layer directory {}", entry.path.display()),
        }
    }
    layers.sort_by_key(|l| l.layer);
    Ok(layers)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/layout.rs"]
mod tests;
