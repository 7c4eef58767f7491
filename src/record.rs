//! Record model for parsed input lines.

use crate::amount::Amount;
use crate::error::ParseError;
use std::str::FromStr;

/// A validated `(amount, currency)` pair from one input line.
///
/// The currency is the raw token from the line: case-sensitive and not
/// checked against any code list, so `usd` and `USD` accumulate separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Exact decimal amount
    pub amount: Amount,

    /// Currency code used as the grouping key
    pub currency: String,
}

impl Record {
    /// Parses the whitespace-tokenized fields of one line.
    ///
    /// Expects exactly `[amount, currency]`. Any other field count is
    /// rejected carrying the observed count; an amount that is not a
    /// decimal numeral is rejected carrying the original text.
    pub fn from_fields(fields: &[&str]) -> Result<Record, ParseError> {
        match fields {
            [amount_text, currency] => {
                let amount = Amount::from_str(amount_text)
                    .map_err(|_| ParseError::InvalidAmount((*amount_text).to_string()))?;
                Ok(Record {
                    amount,
                    currency: (*currency).to_string(),
                })
            }
            _ => Err(ParseError::FieldCount(fields.len())),
        }
    }
}
