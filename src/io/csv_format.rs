//! CSV format handling for journal records and history export
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization of journal rows
//! - Conversion from CSV records to journal entries
//! - HistoryRow structure for serialization of exported transactions
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{AccountId, JournalEntry, JournalOperation, LedgerError, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;
use uuid::Uuid;

/// CSV record structure for deserialization
///
/// Matches the journal format with columns: type, account, amount
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub operation: String,
    pub account: String,
    pub amount: Option<String>,
}

/// CSV row structure for serialization of an exported transaction
///
/// Field order gives the header: account, date, type, amount, balance
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct HistoryRow {
    pub account: AccountId,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub operation: &'static str,
    pub amount: Decimal,
    pub balance: Decimal,
}

impl From<&Transaction> for HistoryRow {
    fn from(transaction: &Transaction) -> Self {
        HistoryRow {
            account: transaction.account_id(),
            date: transaction.date(),
            operation: transaction.operation().as_str(),
            amount: transaction.amount(),
            balance: transaction.balance(),
        }
    }
}

/// Convert a CsvRecord to a JournalEntry
///
/// This function:
/// - Parses the operation name (case-insensitive; `withdrawal` is accepted for `withdraw`)
/// - Parses the account as a UUID
/// - Parses the amount into a Decimal
///
/// Amount sign is not checked here: the engine owns that rule.
///
/// # Returns
///
/// * `Ok(JournalEntry)` - Successfully converted record
/// * `Err(String)` - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord, line: u64) -> Result<JournalEntry, String> {
    let operation = match csv_record.operation.to_lowercase().as_str() {
        "open" => JournalOperation::Open,
        "deposit" => JournalOperation::Deposit,
        "withdraw" | "withdrawal" => JournalOperation::Withdraw,
        _ => return Err(format!("Invalid operation: '{}'", csv_record.operation)),
    };

    let account = Uuid::parse_str(csv_record.account.trim())
        .map_err(|_| format!("Invalid account '{}'", csv_record.account))?;

    let amount = match csv_record.amount {
        Some(amount_str) if !amount_str.trim().is_empty() => Decimal::from_str(amount_str.trim())
            .map_err(|_| format!("Invalid amount '{}'", amount_str))?,
        _ => {
            return Err(format!(
                "{} on account {} requires an amount",
                csv_record.operation, account
            ))
        }
    };

    Ok(JournalEntry {
        line,
        operation,
        account,
        amount,
    })
}

/// Write transactions in CSV format
///
/// Columns: account, date, type, amount, balance. Rows are written in the
/// order given.
pub fn write_history_csv(
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    // Serialized rows emit the header themselves, an empty export writes it directly
    if transactions.is_empty() {
        writer
            .write_record(["account", "date", "type", "amount", "balance"])
            .map_err(|e| LedgerError::IoError {
                message: format!("Failed to write CSV header: {}", e),
            })?;
    }

    for transaction in transactions {
        writer
            .serialize(HistoryRow::from(transaction))
            .map_err(|e| LedgerError::IoError {
                message: format!("Failed to write transaction record: {}", e),
            })?;
    }

    writer.flush()?;

    Ok(())
}
