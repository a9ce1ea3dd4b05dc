//! Money Split CLI
//!
//! Reads split requests from CSV and writes the resulting parts as CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- splits.csv > parts.csv
//! ```
//!
//! # Input
//!
//! A CSV file with the header `value,parts` or `value,parts,decimals`:
//!
//! - `value`: amount and optional unique code, e.g. `-11.11 ISO4217-EUR`
//! - `parts`: positive number of parts
//! - `decimals`: optional; split in steps of `10^-decimals` instead of the
//!   currency's smallest unit. Required for values without currency.
//!
//! # Output
//!
//! `row,index,amount`, one line per part. `row` is the input line, `index`
//! the part's position (larger parts first). Rows that can't be split are
//! logged at warn level and skipped.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use money_split::{MoneyError, Result, SplitBatch};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let input_path = env::args().nth(1).ok_or(MoneyError::MissingArgument)?;

    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut batch = SplitBatch::new();
    batch.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    batch.write_output(handle)?;

    Ok(())
}
