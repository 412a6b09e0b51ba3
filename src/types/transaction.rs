//! Transaction-related types for the account ledger
//!
//! This module defines the account identifier, the operation kinds and the
//! immutable transaction record that makes up an account's history.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

/// Account identifier
///
/// Accounts have no stored entity of their own; an identifier names an
/// account as soon as at least one transaction carries it.
pub type AccountId = Uuid;

/// Operations that can be recorded against an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    ///
    /// Never allowed to take the balance below zero.
    Withdrawal,
}

impl Operation {
    /// Name used in statements and CSV exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Deposit => "DEPOSIT",
            Operation::Withdrawal => "WITHDRAWAL",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Immutable record of one deposit or withdrawal
///
/// Fields are private so a transaction cannot be edited once constructed.
/// The `balance` is the account balance after this transaction was applied,
/// which makes the last transaction of an account the source of its current
/// balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    account_id: AccountId,
    date: NaiveDate,
    operation: Operation,
    amount: Decimal,
    balance: Decimal,
}

impl Transaction {
    /// Create a new transaction record
    ///
    /// The engine is responsible for validating `amount` and `balance` before
    /// calling this; the record itself only carries the values.
    pub fn new(
        account_id: AccountId,
        date: NaiveDate,
        operation: Operation,
        amount: Decimal,
        balance: Decimal,
    ) -> Self {
        Transaction {
            account_id,
            date,
            operation,
            amount,
            balance,
        }
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Balance of the account right after this transaction
    pub fn balance(&self) -> Decimal {
        self.balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::deposit(Operation::Deposit, "DEPOSIT")]
    #[case::withdrawal(Operation::Withdrawal, "WITHDRAWAL")]
    fn test_operation_display(#[case] operation: Operation, #[case] expected: &str) {
        assert_eq!(operation.to_string(), expected);
    }

    #[test]
    fn test_operation_display_honours_padding() {
        assert_eq!(format!("{:<10}|", Operation::Deposit), "DEPOSIT   |");
    }

    #[test]
    fn test_transaction_accessors() {
        let account_id = Uuid::from_u128(7);
        let date = NaiveDate::from_ymd_opt(2007, 12, 23).unwrap();
        let tx = Transaction::new(
            account_id,
            date,
            Operation::Deposit,
            Decimal::new(15, 0),
            Decimal::new(32, 0),
        );

        assert_eq!(tx.account_id(), account_id);
        assert_eq!(tx.date(), date);
        assert_eq!(tx.operation(), Operation::Deposit);
        assert_eq!(tx.amount(), Decimal::new(15, 0));
        assert_eq!(tx.balance(), Decimal::new(32, 0));
    }
}
