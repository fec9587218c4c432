use chrono::NaiveDate;

use super::fx_model::{ExchangeRate, RateType};
use crate::errors::Result;

/// Contract for the collaborator that publishes exchange rates.
///
/// Returns every rate of the given series as of `date`. The engine builds a
/// [`super::RateMap`](super::RateMap) from the result and fails the report if
/// a rate it needs is absent.
pub trait ExchangeRateProviderTrait: Send + Sync {
    fn get_exchange_rates(&self, rate_type: RateType, date: NaiveDate) -> Result<Vec<ExchangeRate>>;
}
