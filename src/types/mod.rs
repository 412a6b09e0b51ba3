//! Types module
//!
//! Contains core data structures used throughout the application:
//! - `transaction`: Account identifier, operation kinds and transaction records
//! - `journal`: Parsed rows of an operations journal
//! - `error`: Error types for the ledger

pub mod error;
pub mod journal;
pub mod transaction;

pub use error::LedgerError;
pub use journal::{JournalEntry, JournalOperation};
pub use transaction::{AccountId, Operation, Transaction};
