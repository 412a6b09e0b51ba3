use crate::core::DEFAULT_CURRENCY_SYMBOL;
use crate::replay::ReplayConfig;
use crate::types::AccountId;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Replay an account operations journal and print statements
#[derive(Parser, Debug)]
#[command(name = "account-ledger")]
#[command(about = "Replay an account operations journal and print statements", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing journal rows
    #[arg(value_name = "INPUT", help = "Path to the journal CSV file (type,account,amount)")]
    pub input_file: PathBuf,

    /// Date stamped on every recorded transaction
    #[arg(
        long = "as-of",
        value_name = "DATE",
        help = "Record transactions on this date (YYYY-MM-DD) instead of today's UTC date"
    )]
    pub as_of: Option<NaiveDate>,

    /// Currency symbol shown in statements
    #[arg(
        long = "currency",
        value_name = "SYMBOL",
        default_value = DEFAULT_CURRENCY_SYMBOL,
        help = "Currency symbol used in statement headers"
    )]
    pub currency: String,

    /// Only print the statement of this account
    #[arg(
        long = "account",
        value_name = "UUID",
        help = "Print only this account (default: every account in journal order)"
    )]
    pub account: Option<AccountId>,

    /// Output format
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "table",
        help = "Output format: 'table' for statements or 'csv' for raw history"
    )]
    pub format: OutputFormat,
}

/// Available output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
}

impl CliArgs {
    /// Build the replay configuration from CLI arguments
    pub fn to_replay_config(&self) -> ReplayConfig {
        ReplayConfig {
            as_of: self.as_of,
            currency: self.currency.clone(),
            account: self.account,
            format: self.format,
        }
    }
}
