//! FX (Foreign Exchange) module - rate models, lookup seam, and rate table.

pub mod currency;
mod fx_errors;
mod fx_model;
mod fx_traits;
mod rate_map;

pub use currency::{currency_full_name, is_dollar, is_domestic};
pub use fx_errors::FxError;
pub use fx_model::{ExchangeRate, RateType};
pub use fx_traits::ExchangeRateProviderTrait;
pub use rate_map::RateMap;
