//! Plain-text statement rendering
//!
//! `PrintableFormatter` renders an account history as a fixed-width table,
//! most recent transaction first, followed by the current balance.
//!
//! ```text
//! AccountId                            | Date       | Type       | Amount (€) |
//! afc4efb4-b30b-41a9-bd68-2373e54d2516 | 2007-12-25 | DEPOSIT    | 854        |
//! afc4efb4-b30b-41a9-bd68-2373e54d2516 | 2007-12-23 | DEPOSIT    | 15         |
//! Balance (€) = 886
//! ```

use crate::core::traits::StatementFormatter;
use crate::types::{LedgerError, Transaction};

/// Currency symbol used when none is configured
pub const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// Fixed-width text formatter for account statements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintableFormatter {
    currency_symbol: String,
}

impl PrintableFormatter {
    /// Create a formatter using the given currency symbol in headers
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        PrintableFormatter {
            currency_symbol: currency_symbol.into(),
        }
    }
}

impl Default for PrintableFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

fn push_row(content: &mut String, columns: [&str; 4]) {
    content.push_str(&format!(
        "{:<36} | {:<10} | {:<10} | {:<10} |\n",
        columns[0], columns[1], columns[2], columns[3]
    ));
}

impl StatementFormatter for PrintableFormatter {
    fn format(&self, transactions: &[Transaction]) -> Result<String, LedgerError> {
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();
        // Stable: same-date transactions keep the store order
        sorted.sort_by(|a, b| b.date().cmp(&a.date()));

        let first = *sorted.first().ok_or(LedgerError::EmptyHistory)?;

        let mut content = String::new();
        let amount_header = format!("Amount ({})", self.currency_symbol);
        push_row(&mut content, ["AccountId", "Date", "Type", &amount_header]);

        for transaction in &sorted {
            push_row(
                &mut content,
                [
                    &transaction.account_id().to_string(),
                    &transaction.date().to_string(),
                    transaction.operation().as_str(),
                    &transaction.amount().to_string(),
                ],
            );
        }

        content.push_str(&format!(
            "Balance ({}) = {}",
            self.currency_symbol,
            first.balance()
        ));

        Ok(content)
    }
}
