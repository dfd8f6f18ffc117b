use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Settings;
use crate::model::{LAYER_COLUMN, MetricsTable};
use crate::report::best_layers;

#[derive(Debug, Serialize)]
struct TableDoc<'a> {
    tool: &'static str,
    version: &'static str,
    task: &'static str,
    model: &'static str,
    model_name: String,
    dataset: &'static str,
    dataset_name: String,
    columns: Vec<&'a str>,
    rows: Vec<Map<String, Value>>,
    best: Vec<BestDoc<'a>>,
}

#[derive(Debug, Serialize)]
struct BestDoc<'a> {
    column: &'a str,
    layer: u32,
    value: f64,
}

pub fn render_table_json(
    table: &MetricsTable,
    settings: &Settings,
) -> Result<String, serde_json::Error> {
    let mut columns = Vec::with_capacity(table.columns.len() + 1);
    columns.push(LAYER_COLUMN);
    columns.extend(table.columns.iter().map(String::as_str));

    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            obj.insert(LAYER_COLUMN.to_string(), Value::from(row.layer));
            for column in &table.columns {
                let value = row.get(column).map(Value::from).unwrap_or(Value::Null);
                obj.insert(column.clone(), value);
            }
            obj
        })
        .collect();

    let best = best_layers(table);
    let doc = TableDoc {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        task: table.task.key(),
        model: table.model.key(),
        model_name: settings.model_name(table.model),
        dataset: table.dataset.key(),
        dataset_name: settings.dataset_name(table.dataset),
        columns,
        rows,
        best: best
            .iter()
            .map(|b| BestDoc {
                column: &b.column,
                layer: b.layer,
                value: b.value,
            })
            .collect(),
    };

    serde_json::to_string_pretty(&doc)
}
