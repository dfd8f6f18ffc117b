use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::AggregateError;
use crate::input::ResultsSource;

/// A parsed metrics JSON file, remembered with its path for error reporting.
#[derive(Debug, Clone)]
pub struct MetricDocument {
    pub path: PathBuf,
    pub value: Value,
}

pub fn load_document(
    source: &dyn ResultsSource,
    path: &Path,
) -> Result<MetricDocument, AggregateError> {
    let content = source
        .read_to_string(path)
        .map_err(|e| AggregateError::malformed(path, format!("cannot read file: {e}")))?;
    let value = serde_json::from_str(&content)
        .map_err(|e| AggregateError::malformed(path, format!("invalid JSON: {e}")))?;
    Ok(MetricDocument {
        path: path.to_path_buf(),
        value,
    })
}

impl MetricDocument {
    /// Numeric value at a nested key path such as `["score", "mean"]`.
    pub fn number(&self, key_path: &[&str]) -> Result<f64, AggregateError> {
        let mut node = &self.value;
        for key in key_path {
            node = node.get(*key).ok_or_else(|| {
                AggregateError::malformed(&self.path, format!("missing key {}", key_path.join(".")))
            })?;
        }
        node.as_f64().ok_or_else(|| {
            AggregateError::malformed(
                &self.path,
                format!("key {} is not a number", key_path.join(".")),
            )
        })
    }

    /// `{name: {"mean": x}, ...}` flattened to `(name, x)` pairs in key order.
    pub fn mean_entries(&self) -> Result<Vec<(String, f64)>, AggregateError> {
        let map = self
            .value
            .as_object()
            .ok_or_else(|| AggregateError::malformed(&self.path, "top level is not an object"))?;
        let mut out = Vec::with_capacity(map.len());
        for (name, entry) in map {
            let mean = entry
                .get("mean")
                .and_then(Value::as_f64)
                .ok_or_else(|| {
                    AggregateError::malformed(&self.path, format!("missing numeric {name}.mean"))
                })?;
            out.push((name.clone(), mean));
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/metrics.rs"]
mod tests;
