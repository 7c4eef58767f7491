//! # Currency Aggregator
//!
//! A streaming processor that reads whitespace-separated
//! `<amount> <currency>` records and reports exact per-currency totals.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: Sums accumulate via `rust_decimal`, never floats
//! - **Streaming processing**: Memory-efficient line-by-line reading
//! - **Forgiving input**: Malformed lines are logged and skipped
//! - **Deterministic output**: Currencies sorted in ascending byte order
//!
//! ## Example
//!
//! ```no_run
//! use currency_aggregator::CurrencyAggregator;
//! use std::io::Cursor;
//!
//! let input = "100.50 USD\n49.50 USD\n10 EUR\n";
//! let mut aggregator = CurrencyAggregator::new();
//! aggregator.process_lines(Cursor::new(input)).unwrap();
//! aggregator.write_report(std::io::stdout()).unwrap();
//! ```

pub mod aggregator;
pub mod amount;
pub mod error;
pub mod record;

pub use aggregator::CurrencyAggregator;
pub use amount::Amount;
pub use error::{EngineError, ParseError, Result};
pub use record::Record;
