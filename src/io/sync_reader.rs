//! Synchronous journal reader with iterator interface
//!
//! Provides a streaming iterator over journal entries from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! ```no_run
//! use account_ledger::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("journal.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(entry) => println!("Replaying: {:?}", entry),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as `LedgerError::ParseError` with the line number

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{JournalEntry, LedgerError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Synchronous journal reader
///
/// Reads one CSV row at a time; memory usage does not grow with file size.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// The CSV reader trims whitespace from all fields and allows a missing
    /// trailing amount column.
    ///
    /// # Errors
    ///
    /// * `FileNotFound` if nothing exists at `path`
    /// * `IoError` if the file cannot be opened for another reason
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LedgerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LedgerError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 1,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<JournalEntry, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();
        let result = deserializer.next()?;
        self.line_num += 1;

        Some(match result {
            Ok(csv_record) => convert_csv_record(csv_record, self.line_num)
                .map_err(|e| LedgerError::parse(Some(self.line_num), e)),
            Err(e) => Err(LedgerError::parse(Some(self.line_num), e.to_string())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JournalOperation;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "type,account,amount\n";
    const ACCOUNT: &str = "afc4efb4-b30b-41a9-bd68-2373e54d2516";

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(rows: &[String]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(HEADER.as_bytes())
            .expect("Failed to write to temp file");
        for row in rows {
            writeln!(file, "{}", row).expect("Failed to write to temp file");
        }
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn row(operation: &str, amount: &str) -> String {
        format!("{},{},{}", operation, ACCOUNT, amount)
    }

    #[test]
    fn test_sync_reader_fails_on_missing_file() {
        let result = SyncReader::new(Path::new("nonexistent.csv"));
        assert_eq!(
            result.unwrap_err(),
            LedgerError::FileNotFound {
                path: "nonexistent.csv".to_string()
            }
        );
    }

    #[test]
    fn test_sync_reader_iterates_entries_in_order() {
        let file = create_temp_csv(&[
            row("open", "15"),
            row("deposit", "854"),
            row("withdraw", "11"),
        ]);

        let entries: Vec<JournalEntry> = SyncReader::new(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        let operations: Vec<JournalOperation> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(
            operations,
            [
                JournalOperation::Open,
                JournalOperation::Deposit,
                JournalOperation::Withdraw
            ]
        );
        let lines: Vec<u64> = entries.iter().map(|e| e.line).collect();
        assert_eq!(lines, [2, 3, 4]);
        assert_eq!(entries[1].amount, Decimal::new(854, 0));
    }

    #[test]
    fn test_sync_reader_includes_line_numbers_in_errors() {
        let file = create_temp_csv(&[
            row("open", "15"),
            row("deposit", "invalid"),
            row("deposit", "5"),
        ]);

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(records[2].is_ok());

        let error = records[1].as_ref().unwrap_err();
        assert!(matches!(error, LedgerError::ParseError { line: Some(3), .. }));
        assert!(error.to_string().contains("Invalid amount"));
    }

    #[test]
    fn test_sync_reader_handles_whitespace() {
        let file = create_temp_csv(&[format!("  deposit  ,  {}  ,  100.0  ", ACCOUNT)]);

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_ref().unwrap().amount, Decimal::new(1000, 1));
    }

    #[test]
    fn test_sync_reader_handles_empty_file_after_header() {
        let file = create_temp_csv(&[]);

        let records: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert!(records.is_empty());
    }

    #[test]
    fn test_sync_reader_continues_after_error() {
        let file = create_temp_csv(&[
            row("open", "15"),
            row("transfer", "5"),
            row("deposit", "75"),
        ]);

        let valid: Vec<_> = SyncReader::new(file.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        assert_eq!(valid.len(), 2);
        assert_eq!(valid[1].line, 4);
    }
}
