//! Core currency aggregation pipeline.
//!
//! Streams input lines one at a time, folds valid records into per-currency
//! running totals, and writes the final report. Rejected lines are logged
//! at warn level and skipped; they never abort the run.

use crate::amount::Amount;
use crate::error::Result;
use crate::record::Record;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// The currency aggregation engine.
///
/// Maintains one exact running total per currency code. Totals are keyed
/// case-sensitively, and the map keeps its keys in ascending byte order,
/// which is the report's required ordering.
///
/// # Output Ordering
///
/// Report lines are sorted by currency code in ascending lexicographic
/// order to ensure deterministic, reproducible output.
pub struct CurrencyAggregator {
    /// Exact running totals indexed by currency code.
    totals: BTreeMap<String, Amount>,
}

impl CurrencyAggregator {
    /// Creates a new empty aggregator.
    pub fn new() -> Self {
        CurrencyAggregator {
            totals: BTreeMap::new(),
        }
    }

    /// Processes `<amount> <currency>` lines from a reader in streaming fashion.
    ///
    /// Lines are read one at a time to keep memory flat for large inputs.
    /// Malformed lines are logged at warn level with their line number and
    /// skipped; only a stream-level read failure is fatal.
    pub fn process_lines<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1; // 1-indexed for diagnostics

            let fields: Vec<&str> = line.split_whitespace().collect();
            match Record::from_fields(&fields) {
                Ok(record) => {
                    debug!("Line {}: Adding {} to {}", line_no, fields[0], fields[1]);
                    self.accumulate(record);
                }
                Err(e) => {
                    warn!("Line {}: Skipping {}", line_no, e);
                }
            }
        }

        Ok(())
    }

    /// Adds a record's amount to its currency's running total.
    ///
    /// A currency not seen before starts from exact zero. Addition is
    /// exact, so the final total per currency does not depend on the order
    /// records arrive in.
    pub fn accumulate(&mut self, record: Record) {
        *self.totals.entry(record.currency).or_insert(Amount::ZERO) += record.amount;
    }

    /// Writes the final totals as `<currency>: <amount>` lines.
    ///
    /// One line per currency seen, ascending by code, with the exact sum
    /// rounded half-to-even to exactly two decimal places. Currencies with
    /// no valid records never appear; there is no header or trailer.
    pub fn write_report<W: Write>(&self, mut writer: W) -> Result<()> {
        for (currency, total) in &self.totals {
            writeln!(writer, "{}: {}", currency, total)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Returns the running total for a currency (for testing).
    #[cfg(test)]
    pub fn get_total(&self, currency: &str) -> Option<&Amount> {
        self.totals.get(currency)
    }
}

impl Default for CurrencyAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn process_str(input: &str) -> CurrencyAggregator {
        let mut aggregator = CurrencyAggregator::new();
        aggregator.process_lines(Cursor::new(input)).unwrap();
        aggregator
    }

    fn report_str(aggregator: &CurrencyAggregator) -> String {
        let mut output = Vec::new();
        aggregator.write_report(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_sums_per_currency() {
        let aggregator = process_str("100.50 USD\n49.50 USD\n10 EUR\n");

        assert_eq!(aggregator.get_total("USD").unwrap().to_string(), "150.00");
        assert_eq!(aggregator.get_total("EUR").unwrap().to_string(), "10.00");
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let aggregator = process_str("10 EUR\nabc GBP\n5 EUR 1\n20 EUR\n");

        assert_eq!(aggregator.get_total("EUR").unwrap().to_string(), "30.00");
        assert!(aggregator.get_total("GBP").is_none());
    }

    #[test]
    fn test_blank_lines_contribute_nothing() {
        let aggregator = process_str("1 EUR\n\n   \n2 EUR\n");
        assert_eq!(aggregator.get_total("EUR").unwrap().to_string(), "3.00");
    }

    #[test]
    fn test_negative_amounts_reduce_totals() {
        let aggregator = process_str("10 USD\n-2.50 USD\n");
        assert_eq!(aggregator.get_total("USD").unwrap().to_string(), "7.50");
    }

    #[test]
    fn test_accumulate_starts_from_zero() {
        let mut aggregator = CurrencyAggregator::new();
        aggregator.accumulate(Record::from_fields(&["1.25", "CHF"]).unwrap());
        aggregator.accumulate(Record::from_fields(&["1.25", "CHF"]).unwrap());

        assert_eq!(aggregator.get_total("CHF").unwrap().to_string(), "2.50");
    }

    #[test]
    fn test_report_sorted_ascending() {
        let output = report_str(&process_str("1 JPY\n2 EUR\n3 USD\n"));
        assert_eq!(output, "EUR: 2.00\nJPY: 1.00\nUSD: 3.00\n");
    }

    #[test]
    fn test_currencies_are_case_sensitive() {
        let output = report_str(&process_str("1 USD\n2 usd\n"));
        assert_eq!(output, "USD: 1.00\nusd: 2.00\n");
    }

    #[test]
    fn test_zero_sum_currency_is_reported() {
        let output = report_str(&process_str("0 GBP\n"));
        assert_eq!(output, "GBP: 0.00\n");
    }

    #[test]
    fn test_empty_input_produces_empty_report() {
        let output = report_str(&process_str(""));
        assert_eq!(output, "");
    }

    #[test]
    fn test_mixed_feed_report() {
        let aggregator = process_str("100.50 USD\n49.50 USD\n10 EUR\nabc GBP\n5 EUR 1\n");
        assert_eq!(report_str(&aggregator), "EUR: 10.00\nUSD: 150.00\n");
    }

    #[test]
    fn test_totals_independent_of_line_order() {
        let forward = report_str(&process_str("0.10 BTC\n0.007 BTC\n1.893 BTC\n"));
        let shuffled = report_str(&process_str("1.893 BTC\n0.007 BTC\n0.10 BTC\n"));

        assert_eq!(forward, shuffled);
        assert_eq!(forward, "BTC: 2.00\n");
    }

    #[test]
    fn test_tabs_and_runs_of_whitespace() {
        let aggregator = process_str("  1.00\t\tUSD  \n   2.00   USD\n");
        assert_eq!(aggregator.get_total("USD").unwrap().to_string(), "3.00");
    }
}
