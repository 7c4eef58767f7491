//! Currency Aggregator CLI
//!
//! A streaming aggregator that reads whitespace-separated
//! `<amount> <currency>` records from a text file and prints sorted
//! per-currency totals.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- ledger.txt > totals.txt
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Overrides the default `warn` verbosity; `debug` adds
//!   per-record tracing

use currency_aggregator::{CurrencyAggregator, EngineError, Result};
use env_logger::Env;
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(EngineError::MissingArgument);
    }

    // Only the first positional argument is used; extras are ignored.
    let input_path = &args[1];
    let file = File::open(input_path).map_err(|source| EngineError::FileNotFound {
        path: input_path.clone(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut aggregator = CurrencyAggregator::new();
    aggregator.process_lines(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    aggregator.write_report(handle)?;

    Ok(())
}
