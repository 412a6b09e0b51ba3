//! In-memory transaction storage
//!
//! This module provides the `InMemoryTransactionStore`, a `TransactionRepository`
//! that keeps each account's history as an append-only vector. It is the
//! store used by the journal replay and by the tests.
//!
//! # Ordering
//!
//! History is returned in insertion order. The last inserted transaction of an
//! account is the one answering `find_last_transaction`, whatever its date.

use crate::core::traits::TransactionRepository;
use crate::types::{AccountId, LedgerError, Transaction};
use std::collections::HashMap;

/// In-memory transaction store
///
/// Maintains a HashMap of account ID to that account's transactions.
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    /// Map of account ID to its transactions, oldest first
    histories: HashMap<AccountId, Vec<Transaction>>,
}

impl InMemoryTransactionStore {
    /// Create a new empty transaction store
    pub fn new() -> Self {
        InMemoryTransactionStore {
            histories: HashMap::new(),
        }
    }

    /// Number of transactions stored across all accounts
    pub fn len(&self) -> usize {
        self.histories.values().map(Vec::len).sum()
    }

    /// Whether no transaction has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }
}

impl TransactionRepository for InMemoryTransactionStore {
    fn save_transaction(&mut self, transaction: Transaction) -> Result<Transaction, LedgerError> {
        self.histories
            .entry(transaction.account_id())
            .or_default()
            .push(transaction.clone());
        Ok(transaction)
    }

    fn find_last_transaction(
        &self,
        account_id: AccountId,
    ) -> Result<Option<Transaction>, LedgerError> {
        Ok(self
            .histories
            .get(&account_id)
            .and_then(|history| history.last())
            .cloned())
    }

    fn get_history(&self, account_id: AccountId) -> Result<Vec<Transaction>, LedgerError> {
        Ok(self.histories.get(&account_id).cloned().unwrap_or_default())
    }
}
