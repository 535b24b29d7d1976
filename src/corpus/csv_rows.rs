// CSV loading: headers become row keys, every cell is kept as trimmed text.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::models::Row;

/// Read all rows from a CSV file with a header line.
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open CSV file {}", path.display()))?;
    let rows = parse_rows(file).with_context(|| format!("Failed to parse {}", path.display()))?;
    info!(rows = rows.len(), path = %path.display(), "Loaded CSV rows");
    Ok(rows)
}

/// Parse CSV from any reader. Short records get empty cells for the
/// missing columns; blank header names are skipped.
pub fn parse_rows<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .context("CSV has no header row")?
        .clone();

    let mut rows = Vec::new();
    for (line, record) in csv_reader.records().enumerate() {
        // +2: one for the header, one for 1-based numbering
        let record = record.with_context(|| format!("Malformed CSV record on line {}", line + 2))?;
        let row: Row = headers
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.is_empty())
            .map(|(i, name)| (name.to_string(), record.get(i).unwrap_or("").to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}
