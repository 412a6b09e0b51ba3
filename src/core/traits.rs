//! Core traits for transaction storage, time and statement rendering
//!
//! The engine only talks to its collaborators through these traits so that
//! in-memory implementations can be used in tests and durable ones elsewhere.

use crate::types::{AccountId, LedgerError, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Trait for persisting and querying account transactions
///
/// History is append-only and keyed by account. Implementations must give
/// read-your-writes consistency for a single account.
///
/// # Concurrency
///
/// The engine reads the last transaction and then saves the next one. When a
/// store is shared between several engines or threads, the store is
/// responsible for serializing operations on the same account so that two
/// withdrawals cannot both observe the same last balance.
pub trait TransactionRepository {
    /// Persist a transaction and return the stored value
    fn save_transaction(&mut self, transaction: Transaction) -> Result<Transaction, LedgerError>;

    /// Get the most recent transaction of an account, if any
    fn find_last_transaction(
        &self,
        account_id: AccountId,
    ) -> Result<Option<Transaction>, LedgerError>;

    /// Get every transaction of an account in store order
    fn get_history(&self, account_id: AccountId) -> Result<Vec<Transaction>, LedgerError>;
}

/// Trait for the source of transaction dates
pub trait TimeProvider {
    /// Current calendar date in UTC
    fn current_date(&self) -> NaiveDate;
}

/// Trait for recording operations on accounts
///
/// Provides the main interface of the ledger. Every recording operation returns
/// the transaction as persisted by the store.
pub trait AccountOperations {
    /// Record the first deposit of a new account
    fn open_account(
        &mut self,
        account_id: AccountId,
        initial_deposit: Decimal,
    ) -> Result<Transaction, LedgerError>;

    /// Credit an existing account
    fn deposit(&mut self, account_id: AccountId, amount: Decimal)
        -> Result<Transaction, LedgerError>;

    /// Debit an existing account without taking it below zero
    fn withdraw(
        &mut self,
        account_id: AccountId,
        amount: Decimal,
    ) -> Result<Transaction, LedgerError>;

    /// Render the account history with the given formatter
    fn print_statement(
        &self,
        account_id: AccountId,
        formatter: &dyn StatementFormatter,
    ) -> Result<String, LedgerError>;
}

/// Trait for rendering an account history as text
pub trait StatementFormatter {
    /// Render the given transactions
    ///
    /// Returns `LedgerError::EmptyHistory` when `transactions` is empty.
    fn format(&self, transactions: &[Transaction]) -> Result<String, LedgerError>;
}
