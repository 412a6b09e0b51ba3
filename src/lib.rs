//! Account Ledger Library
//! # Overview
//!
//! This library records deposits and withdrawals against personal accounts and
//! renders chronological statements. Each account's balance is derived from
//! its last recorded transaction; there is no separate account entity.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, Operation, errors, journal entries)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Account transaction engine (validation and balance derivation)
//!   - [`core::transaction_store`] - In-memory append-only transaction history
//!   - [`core::clock`] - Date sources for new transactions
//!   - [`core::formatter`] - Fixed-width text statements
//! - [`io`] - Journal parsing and CSV history export
//! - [`replay`] - Journal replay pipeline used by the CLI
//!
//! # Business Rules
//!
//! - **Amounts**: must be strictly positive, checked before anything else
//! - **Accounts**: exist once they have a transaction; unknown accounts are rejected
//! - **Withdrawals**: can never take the balance below zero
//!
//! # Example
//!
//! ```
//! use account_ledger::{AccountOperations, AccountService, FixedClock, InMemoryTransactionStore, PrintableFormatter};
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//! use uuid::Uuid;
//!
//! let clock = FixedClock(NaiveDate::from_ymd_opt(2007, 12, 23).unwrap());
//! let mut service = AccountService::new(InMemoryTransactionStore::new(), clock);
//! let account = Uuid::from_u128(1);
//!
//! service.open_account(account, Decimal::new(32, 0)).unwrap();
//! let tx = service.deposit(account, Decimal::new(854, 0)).unwrap();
//! assert_eq!(tx.balance(), Decimal::new(886, 0));
//!
//! assert_eq!(service.balance(account).unwrap(), Decimal::new(886, 0));
//!
//! let statement = service.print_statement(account, &PrintableFormatter::default()).unwrap();
//! assert_eq!(statement.lines().count(), 4);
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod replay;
pub mod types;

pub use crate::core::{
    AccountOperations, AccountService, FixedClock, InMemoryTransactionStore, PrintableFormatter,
    StatementFormatter, SystemClock, TimeProvider, TransactionRepository,
};
pub use io::write_history_csv;
pub use types::{AccountId, JournalEntry, JournalOperation, LedgerError, Operation, Transaction};
