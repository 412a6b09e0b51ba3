//! Account Ledger CLI
//!
//! Replays an operations journal through the ledger and prints account
//! statements.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- journal.csv
//! cargo run -- --as-of 2007-12-23 --currency '$' journal.csv
//! cargo run -- --account afc4efb4-b30b-41a9-bd68-2373e54d2516 --format csv journal.csv
//! ```
//!
//! The journal is a CSV file with columns `type,account,amount` where `type`
//! is `open`, `deposit` or `withdraw`.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `warn`, `info` or `debug` to see rejected rows and recorded transactions
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, unknown account filter, output failure, etc.)

use account_ledger::cli;
use account_ledger::replay;
use std::process;

fn main() {
    env_logger::init();

    let args = cli::parse_args();
    let config = args.to_replay_config();

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    if let Err(e) = replay::replay_journal(&args.input_file, &config, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
