//! Weekly quote CSV ingestion
//!
//! Reads the historical-prices export format
//!
//! ```text
//! Date,Open,High,Low,Close,Volume,Adj Close
//! 2024-01-08,100.0,104.2,99.1,103.5,1234567,103.5
//! ```
//!
//! Rows may come in any order (exports are usually newest first). A header
//! that does not match exactly means the source returned something else,
//! typically an error page, and is reported as a fetch error.

use std::io::Cursor;
use std::path::Path;

use chrono::NaiveDate;

use crate::core::{HistoricPoint, ModelError, ModelResult};

/// Expected header line
pub const WEEKLY_CSV_HEADER: [&str; 7] =
    ["Date", "Open", "High", "Low", "Close", "Volume", "Adj Close"];

/// Parse weekly OHLC rows from CSV text
pub fn parse_weekly_csv(text: &str) -> ModelResult<Vec<HistoricPoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(Cursor::new(text));

    let headers = reader
        .headers()
        .map_err(|e| ModelError::data_fetch(format!("Failed to read CSV header: {}", e)))?
        .clone();
    if !headers.iter().eq(WEEKLY_CSV_HEADER.iter().copied()) {
        return Err(ModelError::data_fetch(format!(
            "File header not as expected: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut points = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| ModelError::data_fetch(format!("Malformed CSV row {}: {}", line + 2, e)))?;

        let field = |idx: usize| record.get(idx).unwrap_or_default();
        let date = NaiveDate::parse_from_str(field(0), "%Y-%m-%d").map_err(|e| {
            ModelError::data_fetch(format!("Bad date {:?} on row {}: {}", field(0), line + 2, e))
        })?;
        let number = |idx: usize| -> ModelResult<f64> {
            field(idx).parse::<f64>().map_err(|e| {
                ModelError::data_fetch(format!(
                    "Bad {} value {:?} on row {}: {}",
                    WEEKLY_CSV_HEADER[idx],
                    field(idx),
                    line + 2,
                    e
                ))
            })
        };

        points.push(HistoricPoint::new(date, number(1)?, number(2)?, number(3)?, number(4)?));
    }

    tracing::debug!("Parsed {} weekly rows", points.len());
    Ok(points)
}

/// Read and parse a weekly CSV file
pub fn read_weekly_csv(path: impl AsRef<Path>) -> ModelResult<Vec<HistoricPoint>> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_weekly_csv(&text)
}

/// Parse a single-cell last-trade quote
pub fn parse_spot_quote(text: &str) -> ModelResult<f64> {
    let cell = text.lines().next().unwrap_or_default().trim();
    cell.parse::<f64>()
        .map_err(|e| ModelError::data_fetch(format!("Unexpected quote {:?}: {}", cell, e)))
}
