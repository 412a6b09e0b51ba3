//! Error types for the account ledger
//!
//! This module defines all error types that can occur while recording
//! transactions, rendering statements or replaying an operations journal.
//!
//! # Error Categories
//!
//! - **Business Rule Errors**: Invalid amount, unknown account, insufficient funds
//! - **Arithmetic Errors**: Overflow in balance calculations
//! - **Collaborator Errors**: Store failures, empty statement input
//! - **File I/O and CSV Errors**: Raised by the journal replay only

use crate::types::transaction::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Every failure is a distinguishable variant carrying enough context to
/// explain itself. Business rule violations are raised before any store write.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Amount is zero or negative
    ///
    /// Checked before any store access by every recording operation.
    #[error("The amount can't be negative. (requested {amount})")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// No transaction has ever been recorded for the account
    #[error("The account do not exist. (account {account_id})")]
    AccountNotFound {
        /// The unknown account
        account_id: AccountId,
    },

    /// Withdrawal would drive the balance below zero
    ///
    /// The account state remains unchanged.
    #[error(
        "The account can't be negative for a withdrawal. (account {account_id}: balance {balance}, requested {requested})"
    )]
    InsufficientFunds {
        /// Account the withdrawal was attempted on
        account_id: AccountId,
        /// Current balance
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Account cannot be opened because it already has transactions
    #[error("The account already exists. (account {account_id})")]
    AccountAlreadyExists {
        /// The existing account
        account_id: AccountId,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation} for account {account_id}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account the operation was attempted on
        account_id: AccountId,
    },

    /// Statement formatter was given no transactions
    #[error("Cannot format a statement without transactions")]
    EmptyHistory,

    /// Failure reported by the transaction store
    ///
    /// Passed through untouched; the engine does not retry.
    #[error("Transaction store error: {message}")]
    Store {
        /// Description of the store failure
        message: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable during replay: the row is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account_id: AccountId) -> Self {
        LedgerError::AccountNotFound { account_id }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account_id: AccountId, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account_id,
            balance,
            requested,
        }
    }

    /// Create an AccountAlreadyExists error
    pub fn account_already_exists(account_id: AccountId) -> Self {
        LedgerError::AccountAlreadyExists { account_id }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account_id: AccountId) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account_id,
        }
    }

    /// Create a Store error
    pub fn store(message: impl Into<String>) -> Self {
        LedgerError::Store {
            message: message.into(),
        }
    }

    /// Create a ParseError with an optional line number
    pub fn parse(line: Option<u64>, message: impl Into<String>) -> Self {
        LedgerError::ParseError {
            line,
            message: message.into(),
        }
    }
}
