//! Journal replay
//!
//! Orchestrates a complete run: journal rows are streamed from a `SyncReader`
//! into an `AccountService` backed by an in-memory store, then statements (or
//! raw history) are written for the requested accounts.
//!
//! Rows that fail to parse or that the engine rejects are logged at `warn`
//! level and skipped; the replay carries on with the next row.

use crate::cli::OutputFormat;
use crate::core::{
    AccountOperations, AccountService, FixedClock, InMemoryTransactionStore, PrintableFormatter,
    SystemClock, TimeProvider, TransactionRepository,
};
use crate::io::{write_history_csv, SyncReader};
use crate::types::{AccountId, JournalEntry, JournalOperation, LedgerError, Transaction};
use log::{info, warn};
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

/// Settings for a replay run
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayConfig {
    /// Pin the transaction date; `None` uses today's UTC date
    pub as_of: Option<chrono::NaiveDate>,
    pub currency: String,
    /// Only output this account
    pub account: Option<AccountId>,
    pub format: OutputFormat,
}

/// Replay a journal file and write the result to `output`
///
/// # Errors
///
/// Returns an error if the journal cannot be opened, if output cannot be
/// written, or if `config.account` names an account the journal never
/// created. Individual row failures are not errors.
pub fn replay_journal(
    input_path: &Path,
    config: &ReplayConfig,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    match config.as_of {
        Some(date) => run(FixedClock(date), input_path, config, output),
        None => run(SystemClock, input_path, config, output),
    }
}

fn run<C: TimeProvider>(
    clock: C,
    input_path: &Path,
    config: &ReplayConfig,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let reader = SyncReader::new(input_path)?;
    let mut service = AccountService::new(InMemoryTransactionStore::new(), clock);

    // Accounts in the order they were first recorded
    // First-seen order for output, set for membership
    let mut accounts: Vec<AccountId> = Vec::new();
    let mut seen: HashSet<AccountId> = HashSet::new();
    let mut rejected = 0usize;

    for result in reader {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                rejected += 1;
                warn!("Skipping row: {}", e);
                continue;
            }
        };

        match apply(&mut service, &entry) {
            Ok(transaction) => {
                if seen.insert(transaction.account_id()) {
                    accounts.push(transaction.account_id());
                }
            }
            Err(e) => {
                rejected += 1;
                warn!("Line {}: operation rejected: {}", entry.line, e);
            }
        }
    }

    info!(
        "Replayed {} transactions on {} accounts, {} rows rejected",
        service.repository().len(),
        accounts.len(),
        rejected
    );

    let selected = match config.account {
        Some(account_id) => vec![account_id],
        None => accounts,
    };

    match config.format {
        OutputFormat::Table => {
            let formatter = PrintableFormatter::new(config.currency.as_str());
            for (index, account_id) in selected.iter().enumerate() {
                if index > 0 {
                    writeln!(output)?;
                }
                let statement = service.print_statement(*account_id, &formatter)?;
                writeln!(output, "{}", statement)?;
            }
        }
        OutputFormat::Csv => {
            let mut transactions: Vec<Transaction> = Vec::new();
            for account_id in &selected {
                let history = service.repository().get_history(*account_id)?;
                if history.is_empty() {
                    return Err(LedgerError::account_not_found(*account_id));
                }
                transactions.extend(history);
            }
            write_history_csv(&transactions, output)?;
        }
    }

    Ok(())
}

/// Apply one journal entry to the engine
pub fn apply<S: AccountOperations>(
    service: &mut S,
    entry: &JournalEntry,
) -> Result<Transaction, LedgerError> {
    match entry.operation {
        JournalOperation::Open => service.open_account(entry.account, entry.amount),
        JournalOperation::Deposit => service.deposit(entry.account, entry.amount),
        JournalOperation::Withdraw => service.withdraw(entry.account, entry.amount),
    }
}
