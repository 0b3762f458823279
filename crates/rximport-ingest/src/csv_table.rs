//! CSV reading for inventory spreadsheets.
//!
//! Real uploads are messy: UTF-8 BOMs, title and preamble rows above the
//! header, ragged row widths, blank separator lines. The reader normalizes
//! all of that into a rectangular `CsvTable` whose columns can be sampled
//! for value classification.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

/// Number of non-empty values sampled per column for classification.
pub const SAMPLE_LIMIT: usize = 10;

/// A rectangular view of one CSV file: trimmed headers plus data rows
/// padded/truncated to the header width.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// First [`SAMPLE_LIMIT`] non-empty values of the given column.
    pub fn sample_column(&self, col_idx: usize) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|row| row.get(col_idx))
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .take(SAMPLE_LIMIT)
            .map(str::to_string)
            .collect()
    }

    /// Samples for every column, keyed by header. Duplicate headers keep
    /// the first column's sample.
    pub fn sample_columns(&self) -> BTreeMap<String, Vec<String>> {
        let mut samples = BTreeMap::new();
        for (idx, header) in self.headers.iter().enumerate() {
            samples
                .entry(header.clone())
                .or_insert_with(|| self.sample_column(idx));
        }
        samples
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

#[derive(Debug, Default, Clone, Copy)]
struct RowShape {
    total: usize,
    non_empty: usize,
    numeric: usize,
    alpha: usize,
}

impl RowShape {
    fn ratio(self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64
        }
    }

    /// Header rows are dense, mostly alphabetic, and nearly number-free.
    fn is_header_like(self) -> bool {
        self.ratio(self.non_empty) >= 0.8
            && self.ratio(self.alpha) >= 0.5
            && self.ratio(self.numeric) <= 0.1
    }

    /// Data rows carry numbers or gaps.
    fn is_data_like(self) -> bool {
        self.ratio(self.numeric) >= 0.2 || self.ratio(self.total - self.non_empty) >= 0.2
    }
}

fn row_shape(row: &[String]) -> RowShape {
    let mut shape = RowShape {
        total: row.len(),
        ..RowShape::default()
    };
    for cell in row {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            continue;
        }
        shape.non_empty += 1;
        if trimmed.parse::<f64>().is_ok() {
            shape.numeric += 1;
        }
        if trimmed.chars().any(|ch| ch.is_ascii_alphabetic()) {
            shape.alpha += 1;
        }
    }
    shape
}

/// Pick the header row: the last header-like row within the first few rows
/// before data begins. Title/preamble lines above the real header are
/// common in exported stock sheets.
fn detect_header_row(rows: &[Vec<String>]) -> usize {
    if rows.is_empty() {
        return 0;
    }
    let probe = rows.len().min(5);
    let shapes: Vec<RowShape> = rows.iter().take(probe).map(|row| row_shape(row)).collect();
    let data_index = shapes.iter().position(|shape| shape.is_data_like());
    let search_end = data_index.unwrap_or(1).max(1);
    let mut candidate = 0usize;
    for (idx, shape) in shapes.iter().enumerate().take(search_end) {
        if shape.is_header_like() {
            candidate = idx;
        }
    }
    candidate
}

/// Read a CSV file into a [`CsvTable`].
///
/// Blank rows are dropped, the header row is detected heuristically, and
/// every data row is normalized to the header width.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(CsvTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }
    let header_index = detect_header_row(&raw_rows);
    debug!(path = %path.display(), header_index, "header row detected");
    let headers: Vec<String> = raw_rows[header_index]
        .iter()
        .map(|value| normalize_header(value))
        .collect();
    let mut rows = Vec::new();
    for record in raw_rows.iter().skip(header_index + 1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable {
            headers: headers.iter().map(|s| (*s).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| (*s).to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn sampling_skips_empties_and_caps() {
        let rows: Vec<Vec<String>> = (0..30)
            .map(|i| {
                if i % 2 == 0 {
                    vec![format!("v{i}")]
                } else {
                    vec!["  ".to_string()]
                }
            })
            .collect();
        let table = CsvTable {
            headers: vec!["A".to_string()],
            rows,
        };
        let sample = table.sample_column(0);
        assert_eq!(sample.len(), SAMPLE_LIMIT);
        assert_eq!(sample[0], "v0");
        assert_eq!(sample[1], "v2");
    }

    #[test]
    fn header_detection_skips_title_rows() {
        // Flexible CSV parsing yields short rows for title lines.
        let rows = vec![
            vec!["Main Street Pharmacy Stock Sheet".to_string()],
            vec!["Product Name".to_string(), "Qty".to_string(), "Price".to_string()],
            vec!["Paracetamol".to_string(), "120".to_string(), "500".to_string()],
        ];
        assert_eq!(detect_header_row(&rows), 1);
    }

    #[test]
    fn header_detection_defaults_to_first_row() {
        let rows = vec![
            vec!["Product Name".to_string(), "Qty".to_string()],
            vec!["Paracetamol".to_string(), "120".to_string()],
        ];
        assert_eq!(detect_header_row(&rows), 0);
    }

    #[test]
    fn duplicate_headers_keep_first_sample() {
        let t = table(
            &["Name", "Name"],
            &[&["first", "second"], &["one", "two"]],
        );
        let samples = t.sample_columns();
        assert_eq!(samples["Name"], vec!["first".to_string(), "one".to_string()]);
    }
}
