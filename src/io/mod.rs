//! I/O module
//!
//! Handles journal parsing and history output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, history serialization)
//! - `sync_reader` - Synchronous journal reader with iterator interface

pub mod csv_format;
pub mod sync_reader;

pub use csv_format::{convert_csv_record, write_history_csv, CsvRecord, HistoryRow};
pub use sync_reader::SyncReader;
