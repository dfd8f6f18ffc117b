use crate::config::Settings;
use crate::model::MetricsTable;
use crate::report::{best_layers, format_f64_6};

pub fn render_summary_text(tables: &[MetricsTable], settings: &Settings) -> String {
    let mut out = String::new();
    out.push_str("Layer Sweep Summary\n");
    out.push_str("===================\n");

    for table in tables {
        out.push('\n');
        out.push_str(&format!(
            "{} | {} | {}\n",
            capitalize(table.task.label()),
            settings.model_name(table.model),
            settings.dataset_name(table.dataset)
        ));
        if table.is_empty() {
            out.push_str("  no layers found\n");
            continue;
        }
        let layers = table.layers();
        out.push_str(&format!(
            "  layers: {} ({}..={})\n",
            layers.len(),
            layers[0],
            layers[layers.len() - 1]
        ));
        for best in best_layers(table) {
            out.push_str(&format!(
                "  best {}: layer {} ({})\n",
                best.column,
                best.layer,
                format_f64_6(best.value)
            ));
        }
    }
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
