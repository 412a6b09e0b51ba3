//! Library-level tests of the ledger through its public API
//!
//! Uses a clock that can be moved between operations to record transactions
//! on different dates, then checks statements rendered from the result.

use account_ledger::{
    AccountOperations, AccountService, InMemoryTransactionStore, LedgerError, Operation,
    PrintableFormatter, TimeProvider,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::cell::Cell;
use std::rc::Rc;
use uuid::Uuid;

const ACCOUNT: Uuid = Uuid::from_u128(0xafc4efb4_b30b_41a9_bd68_2373e54d2516);

/// Clock whose date is controlled by the test
#[derive(Clone)]
struct ManualClock(Rc<Cell<NaiveDate>>);

impl ManualClock {
    fn new(date: NaiveDate) -> Self {
        ManualClock(Rc::new(Cell::new(date)))
    }

    fn set(&self, date: NaiveDate) {
        self.0.set(date);
    }
}

impl TimeProvider for ManualClock {
    fn current_date(&self) -> NaiveDate {
        self.0.get()
    }
}

fn december(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2007, 12, day).unwrap()
}

fn dec(value: i64) -> Decimal {
    Decimal::new(value, 0)
}

#[test]
fn statement_lists_most_recent_first() {
    let clock = ManualClock::new(december(22));
    let mut service = AccountService::new(InMemoryTransactionStore::new(), clock.clone());

    service.open_account(ACCOUNT, dec(17)).unwrap();
    clock.set(december(23));
    service.deposit(ACCOUNT, dec(15)).unwrap();
    clock.set(december(25));
    let last = service.deposit(ACCOUNT, dec(854)).unwrap();

    assert_eq!(last.date(), december(25));
    assert_eq!(last.operation(), Operation::Deposit);
    assert_eq!(last.balance(), dec(886));

    let statement = service
        .print_statement(ACCOUNT, &PrintableFormatter::default())
        .unwrap();
    let dates: Vec<&str> = statement
        .lines()
        .skip(1)
        .filter_map(|line| line.split('|').nth(1))
        .map(str::trim)
        .collect();

    assert_eq!(dates, ["2007-12-25", "2007-12-23", "2007-12-22"]);
    assert!(statement.ends_with("Balance (€) = 886"));
}

#[test]
fn failed_operations_leave_history_untouched() {
    let clock = ManualClock::new(december(23));
    let mut service = AccountService::new(InMemoryTransactionStore::new(), clock);

    assert!(matches!(
        service.deposit(ACCOUNT, dec(10)),
        Err(LedgerError::AccountNotFound { .. })
    ));
    service.open_account(ACCOUNT, dec(32)).unwrap();
    assert!(matches!(
        service.withdraw(ACCOUNT, dec(33)),
        Err(LedgerError::InsufficientFunds { .. })
    ));
    assert!(matches!(
        service.deposit(ACCOUNT, dec(-1)),
        Err(LedgerError::InvalidAmount { .. })
    ));

    assert_eq!(service.repository().len(), 1);
    assert_eq!(service.balance(ACCOUNT).unwrap(), dec(32));
}

#[test]
fn balance_follows_every_recorded_transaction() {
    let clock = ManualClock::new(december(23));
    let mut service = AccountService::new(InMemoryTransactionStore::new(), clock);
    service.open_account(ACCOUNT, dec(100)).unwrap();

    let mut expected = dec(100);
    for (index, amount) in [5, 40, 1, 25, 30].into_iter().enumerate() {
        let transaction = if index % 2 == 0 {
            expected -= dec(amount);
            service.withdraw(ACCOUNT, dec(amount)).unwrap()
        } else {
            expected += dec(amount);
            service.deposit(ACCOUNT, dec(amount)).unwrap()
        };
        assert_eq!(transaction.amount(), dec(amount));
        assert_eq!(transaction.balance(), expected);
    }

    assert_eq!(service.balance(ACCOUNT).unwrap(), dec(129));
}
