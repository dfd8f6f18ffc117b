pub mod json;
pub mod text;
pub mod tsv;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::aggregate::profiles::{F1_COLUMN, MCC_COLUMN, SCORE_COLUMN};
use crate::config::Settings;
use crate::error::RunError;
use crate::model::{MetricsTable, TaskKind};

pub const SUMMARY_FILE: &str = "summary.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct BestLayer {
    pub column: String,
    pub layer: u32,
    pub value: f64,
}

#[derive(Debug, Clone)]
pub struct WrittenTable {
    pub tsv: PathBuf,
    pub json: PathBuf,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

/// Columns worth ranking layers by for each task family.
pub fn ranking_columns(table: &MetricsTable) -> Vec<String> {
    match table.task {
        TaskKind::Gen => vec![SCORE_COLUMN.to_string()],
        TaskKind::Class => vec![F1_COLUMN.to_string(), MCC_COLUMN.to_string()],
        TaskKind::Ent => table.columns.clone(),
    }
}

pub fn best_layers(table: &MetricsTable) -> Vec<BestLayer> {
    let mut out = Vec::new();
    for column in ranking_columns(table) {
        if let Some((layer, value)) = table.best_by(&column) {
            out.push(BestLayer {
                column,
                layer,
                value,
            });
        }
    }
    out
}

pub fn write_table_reports(
    table: &MetricsTable,
    settings: &Settings,
    out_dir: &Path,
) -> Result<WrittenTable, RunError> {
    fs::create_dir_all(out_dir).map_err(|source| RunError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let stem = table.stem();
    let tsv_path = out_dir.join(format!("{stem}.tsv"));
    write_text(&tsv_path, &tsv::render_table_tsv(table))?;

    let json_path = out_dir.join(format!("{stem}.json"));
    let json = json::render_table_json(table, settings).map_err(|source| RunError::Render {
        path: json_path.clone(),
        source,
    })?;
    write_text(&json_path, &json)?;

    info!(
        "wrote {} and {}",
        tsv_path.display(),
        json_path.display()
    );
    Ok(WrittenTable {
        tsv: tsv_path,
        json: json_path,
    })
}

pub fn write_summary(
    tables: &[MetricsTable],
    settings: &Settings,
    out_dir: &Path,
) -> Result<PathBuf, RunError> {
    fs::create_dir_all(out_dir).map_err(|source| RunError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;
    let path = out_dir.join(SUMMARY_FILE);
    write_text(&path, &text::render_summary_text(tables, settings))?;
    Ok(path)
}

fn write_text(path: &Path, contents: &str) -> Result<(), RunError> {
    let to_err = |source| RunError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(to_err)?);
    w.write_all(contents.as_bytes()).map_err(to_err)?;
    w.flush().map_err(to_err)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
