//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Collaborator and engine abstractions
//! - `engine` - Account transaction engine (deposit, withdraw, statements)
//! - `transaction_store` - In-memory append-only transaction history
//! - `clock` - System and fixed date sources
//! - `formatter` - Fixed-width text statements

pub mod clock;
pub mod engine;
pub mod formatter;
pub mod traits;
pub mod transaction_store;

pub use clock::{FixedClock, SystemClock};
pub use engine::AccountService;
pub use formatter::{PrintableFormatter, DEFAULT_CURRENCY_SYMBOL};
pub use traits::{AccountOperations, StatementFormatter, TimeProvider, TransactionRepository};
pub use transaction_store::InMemoryTransactionStore;
