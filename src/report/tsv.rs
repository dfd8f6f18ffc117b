use crate::model::{LAYER_COLUMN, MetricsTable};
use crate::report::format_f64_6;

/// Header `layer` + value columns; missing cells stay empty.
pub fn render_table_tsv(table: &MetricsTable) -> String {
    let mut out = String::new();
    let mut header = Vec::with_capacity(table.columns.len() + 1);
    header.push(LAYER_COLUMN);
    header.extend(table.columns.iter().map(String::as_str));
    out.push_str(&header.join("\t"));
    out.push('\n');

    for row in &table.rows {
        let mut fields = Vec::with_capacity(header.len());
        fields.push(row.layer.to_string());
        for column in &table.columns {
            fields.push(row.get(column).map(format_f64_6).unwrap_or_default());
        }
        out.push_str(&fields.join("\t"));
        out.push('\n');
    }
    out
}
