//! Operations journal types
//!
//! A journal is a list of account operations replayed, in order, through the
//! engine. Each entry remembers the input line it came from so rejected
//! operations can be reported precisely.

use crate::types::transaction::AccountId;
use rust_decimal::Decimal;

/// Operations a journal entry can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalOperation {
    /// Create the account with an initial deposit
    Open,
    /// Credit an existing account
    Deposit,
    /// Debit an existing account
    Withdraw,
}

/// One parsed journal row
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    /// Input line number (the header is line 1)
    pub line: u64,
    pub operation: JournalOperation,
    pub account: AccountId,
    pub amount: Decimal,
}
