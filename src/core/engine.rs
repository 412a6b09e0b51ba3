//! Account transaction engine
//!
//! This module provides the `AccountService` that validates and applies
//! monetary operations. It coordinates the transaction store, which holds every
//! account's history, and the clock, which dates new transactions.
//!
//! The engine enforces business rules such as:
//! - Amounts must be strictly positive (checked before touching the store)
//! - Accounts exist only once they have a transaction
//! - A withdrawal can never take the balance below zero
//!
//! Rules are checked in that order, so when several are violated at once the
//! amount error wins over the missing account, which wins over the funds check.

use crate::core::traits::{
    AccountOperations, StatementFormatter, TimeProvider, TransactionRepository,
};
use crate::types::{AccountId, LedgerError, Operation, Transaction};
use log::debug;
use rust_decimal::Decimal;

/// Account transaction engine
///
/// Owns its store and clock. Recording operations take `&mut self`, so a
/// read of the last balance and the following save cannot interleave with
/// another operation on the same engine.
pub struct AccountService<R, C> {
    repository: R,
    clock: C,
}

impl<R, C> AccountService<R, C>
where
    R: TransactionRepository,
    C: TimeProvider,
{
    /// Create a new AccountService over the given store and clock
    pub fn new(repository: R, clock: C) -> Self {
        AccountService { repository, clock }
    }

    /// Current balance of an account
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the account has no transaction.
    pub fn balance(&self, account_id: AccountId) -> Result<Decimal, LedgerError> {
        self.last_balance(account_id)
    }

    /// Access the underlying store
    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn verify_amount(amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }
        Ok(())
    }

    fn last_balance(&self, account_id: AccountId) -> Result<Decimal, LedgerError> {
        self.repository
            .find_last_transaction(account_id)?
            .map(|transaction| transaction.balance())
            .ok_or_else(|| LedgerError::account_not_found(account_id))
    }

    /// Date, build and save a transaction whose balance is already validated
    fn record(
        &mut self,
        account_id: AccountId,
        operation: Operation,
        amount: Decimal,
        balance: Decimal,
    ) -> Result<Transaction, LedgerError> {
        let date = self.clock.current_date();
        let saved = self.repository.save_transaction(Transaction::new(
            account_id, date, operation, amount, balance,
        ))?;

        debug!(
            "Recorded {} of {} on account {} ({}), balance {}",
            operation,
            amount,
            account_id,
            date,
            saved.balance()
        );

        Ok(saved)
    }
}

impl<R, C> AccountOperations for AccountService<R, C>
where
    R: TransactionRepository,
    C: TimeProvider,
{
    /// Record the first deposit of a new account
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `initial_deposit` is not strictly positive
    /// - `AccountAlreadyExists` if the account already has a transaction
    fn open_account(
        &mut self,
        account_id: AccountId,
        initial_deposit: Decimal,
    ) -> Result<Transaction, LedgerError> {
        Self::verify_amount(initial_deposit)?;

        if self.repository.find_last_transaction(account_id)?.is_some() {
            return Err(LedgerError::account_already_exists(account_id));
        }

        self.record(
            account_id,
            Operation::Deposit,
            initial_deposit,
            initial_deposit,
        )
    }

    /// Credit an existing account
    ///
    /// The new balance is the last recorded balance plus `amount`.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is not strictly positive
    /// - `AccountNotFound` if the account has no transaction
    /// - `ArithmeticOverflow` if the balance cannot be represented
    fn deposit(
        &mut self,
        account_id: AccountId,
        amount: Decimal,
    ) -> Result<Transaction, LedgerError> {
        Self::verify_amount(amount)?;
        let last_balance = self.last_balance(account_id)?;

        let new_balance = last_balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", account_id))?;

        self.record(account_id, Operation::Deposit, amount, new_balance)
    }

    /// Debit an existing account
    ///
    /// The new balance is the last recorded balance minus `amount`. Emptying
    /// the account exactly is allowed.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is not strictly positive
    /// - `AccountNotFound` if the account has no transaction
    /// - `InsufficientFunds` if the balance would become negative
    fn withdraw(
        &mut self,
        account_id: AccountId,
        amount: Decimal,
    ) -> Result<Transaction, LedgerError> {
        Self::verify_amount(amount)?;
        let last_balance = self.last_balance(account_id)?;

        let new_balance = last_balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", account_id))?;

        if new_balance < Decimal::ZERO {
            return Err(LedgerError::insufficient_funds(
                account_id,
                last_balance,
                amount,
            ));
        }

        self.record(account_id, Operation::Withdrawal, amount, new_balance)
    }

    /// Render the account history with the given formatter
    ///
    /// The history is passed to the formatter in store order and its output
    /// is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if the account has no transaction; the
    /// formatter is not called in that case.
    fn print_statement(
        &self,
        account_id: AccountId,
        formatter: &dyn StatementFormatter,
    ) -> Result<String, LedgerError> {
        let history = self.repository.get_history(account_id)?;
        if history.is_empty() {
            return Err(LedgerError::account_not_found(account_id));
        }

        formatter.format(&history)
    }
}
