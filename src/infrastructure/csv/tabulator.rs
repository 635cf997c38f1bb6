use csv::ReaderBuilder;
use serde_json::{Map, Value};

use crate::domain::error::{AppError, Result};
use crate::domain::sheet::SheetTable;

/// Parse CSV text into a `SheetTable`.
///
/// The first record is the header row and defines the column names and
/// their order. Every following record becomes one row object keyed by
/// column name. Rows shorter than the header fill the gap with `""`;
/// rows longer than the header drop the unheadered cells. Cell values
/// pass through verbatim, so an empty numeric cell stays `""` and can
/// never surface as a null or NaN token in the output.
pub fn tabulate(content: &str) -> Result<SheetTable> {
    let mut reader = ReaderBuilder::new()
        .flexible(true) // allow rows with different lengths
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
        .clone();

    if headers.is_empty() {
        return Err(AppError::ParseError(
            "No columns to parse from response body".to_string(),
        ));
    }

    let columns: Vec<String> = headers.iter().map(str::to_string).collect();

    let mut data = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
        })?;

        let mut row = Map::with_capacity(columns.len());
        for (idx, column) in columns.iter().enumerate() {
            let value = record.get(idx).unwrap_or("");
            row.insert(column.clone(), Value::String(value.to_string()));
        }
        data.push(row);
    }

    Ok(SheetTable { columns, data })
}
