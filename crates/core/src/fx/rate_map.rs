//! Pre-fetched per-date exchange rate table.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::fx_errors::FxError;
use super::fx_model::ExchangeRate;
use crate::errors::Result;

/// Rates for one as-of date, keyed by (from, to).
///
/// Lookups are fail-closed: a missing pair is an error, never a default.
/// No inverse derivation either — only rates the provider actually
/// published are usable.
#[derive(Debug, Clone)]
pub struct RateMap {
    rates: HashMap<(String, String), Decimal>,
    date: NaiveDate,
}

impl RateMap {
    pub fn from_rates(rates: Vec<ExchangeRate>, date: NaiveDate) -> Self {
        let rates = rates
            .into_iter()
            .map(|r| ((r.from_currency, r.to_currency), r.rate))
            .collect();
        RateMap { rates, date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn get(&self, from_currency: &str, to_currency: &str) -> Result<Decimal> {
        if from_currency == to_currency {
            return Ok(Decimal::ONE);
        }

        let pair = (from_currency.to_string(), to_currency.to_string());
        match self.rates.get(&pair) {
            Some(rate) => Ok(*rate),
            None => {
                log::error!(
                    "Required exchange rate missing for {}->{} on {}",
                    from_currency,
                    to_currency,
                    self.date
                );
                Err(FxError::RateNotFound {
                    from_currency: from_currency.to_string(),
                    to_currency: to_currency.to_string(),
                    date: self.date,
                }
                .into())
            }
        }
    }
}
