use csv::{Terminator, WriterBuilder};

use super::reports_model::CategoryReportRow;
use crate::errors::{Error, Result};

const CSV_HEADERS: [&str; 3] = ["Categoria", "Valor", "Quantidade de Gastos"];

/// Renders the per-category rows as CSV: a header line and one line per
/// category, `\n`-separated with no trailing newline. Fields are only quoted
/// when they contain a comma, quote or line break.
pub fn export_csv(rows: &[CategoryReportRow]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for row in rows {
        let amount = row.amount.normalize().to_string();
        let count = row.count.to_string();
        writer.write_record([row.category.as_str(), amount.as_str(), count.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    let mut content = String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))?;
    if content.ends_with('\n') {
        content.pop();
    }
    Ok(content)
}
