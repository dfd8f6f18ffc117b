use std::path::{Path, PathBuf};

pub mod layout;
pub mod metrics;

pub use layout::{LayerDir, ResultsLayout, discover_layers, require_dir};
pub use metrics::{MetricDocument, load_document};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Read-only view over a results tree.
///
/// Every file the aggregators touch goes through this trait, so tests can
/// observe or fake the filesystem.
pub trait ResultsSource {
    fn is_dir(&self, path: &Path) -> bool;

    /// Entries of `path`, sorted by name.
    fn list_dir(&self, path: &Path) -> std::io::Result<Vec<DirEntryInfo>>;

    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl ResultsSource for LocalFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> std::io::Result<Vec<DirEntryInfo>> {
        let mut out = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let path = entry.path();
            out.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: path.is_dir(),
                path,
            });
        }
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}
