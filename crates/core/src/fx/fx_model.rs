//! Exchange rate domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which published rate series a lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateType {
    /// Daily operating rate.
    #[default]
    Operational,
    /// Month-end rate published by the central bank.
    Banxico,
}

impl RateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateType::Operational => "OPERATIONAL",
            RateType::Banxico => "BANXICO",
        }
    }
}

/// One published exchange rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub rate_type: RateType,
    pub from_currency: String,
    pub to_currency: String,
    pub rate: Decimal,
    pub date: NaiveDate,
}
