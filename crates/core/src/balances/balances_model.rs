//! Trial balance query model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fx::RateType;

/// Scope and options of one trial balance build.
///
/// Serialized form doubles as the memoization fingerprint, so every field
/// that affects the output must live here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceQuery {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,

    /// Ledgers (books) in scope; empty means all.
    pub ledgers: Vec<String>,
    /// Currency codes in scope; empty means all.
    pub currencies: Vec<String>,
    /// Sector codes in scope; empty means all.
    pub sectors: Vec<String>,
    pub from_account: String,
    pub to_account: String,

    /// Deepest account level to keep in the output; 0 keeps every level.
    pub level: u32,
    pub with_average_balance: bool,
    /// Keep subledger-account details as rows instead of folding them into
    /// their parent posting entries.
    pub with_subledger_accounts: bool,

    pub exchange_rate_type: RateType,
    /// As-of date for valuation rates; defaults to `to_date`.
    pub exchange_rate_date: Option<NaiveDate>,
}

impl TrialBalanceQuery {
    pub fn exchange_rate_date(&self) -> NaiveDate {
        self.exchange_rate_date.unwrap_or(self.to_date)
    }
}
