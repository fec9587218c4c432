use chrono::NaiveDate;
use thiserror::Error;

/// Errors from exchange-rate lookups.
///
/// A missing rate for a currency actually in use aborts the build. The
/// engine never substitutes a default rate: a wrong total is worse than no
/// total.
#[derive(Error, Debug)]
pub enum FxError {
    #[error("Exchange rate not found for {from_currency}/{to_currency} on {date}")]
    RateNotFound {
        from_currency: String,
        to_currency: String,
        date: NaiveDate,
    },

    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),
}
