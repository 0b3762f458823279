//! Spreadsheet ingestion for the mapping engine.
//!
//! Produces the `headers + rows` view the auto-mapper consumes and the
//! per-column value samples the classifier reads. No mapping logic lives
//! here; this crate only gets dirty files into clean memory.

pub mod csv_table;

pub use csv_table::{CsvTable, SAMPLE_LIMIT, read_csv_table};
