//! Report result models.
//!
//! A report is immutable once built: the builder hands back an ordered list
//! ready for direct projection into report DTOs, with no further reordering
//! or grouping required downstream.

use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::balances::TrialBalanceQuery;
use crate::entries::BalanceEntry;
use crate::valuation::{MonthlyValuation, ValuedEntry};

/// Ordered, leveled trial balance.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalance {
    pub id: String,
    pub query: TrialBalanceQuery,
    pub entries: Vec<BalanceEntry>,
    pub calculated_at: NaiveDateTime,
}

impl TrialBalance {
    pub fn new(query: TrialBalanceQuery, entries: Vec<BalanceEntry>) -> Self {
        TrialBalance {
            id: Uuid::new_v4().to_string(),
            query,
            entries,
            calculated_at: Utc::now().naive_utc(),
        }
    }

    pub fn empty(query: TrialBalanceQuery) -> Self {
        Self::new(query, Vec::new())
    }
}

/// Trial balance carried into a common valuation currency.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuedTrialBalance {
    pub id: String,
    pub query: TrialBalanceQuery,
    pub entries: Vec<ValuedEntry>,
    pub calculated_at: NaiveDateTime,
}

impl ValuedTrialBalance {
    pub fn new(query: TrialBalanceQuery, entries: Vec<ValuedEntry>) -> Self {
        ValuedTrialBalance {
            id: Uuid::new_v4().to_string(),
            query,
            entries,
            calculated_at: Utc::now().naive_utc(),
        }
    }

    pub fn empty(query: TrialBalanceQuery) -> Self {
        Self::new(query, Vec::new())
    }
}

/// Month-by-month revaluation roll-up across a date range.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevaluationReport {
    pub id: String,
    pub query: TrialBalanceQuery,
    pub accounts: Vec<MonthlyValuation>,
    pub calculated_at: NaiveDateTime,
}

impl RevaluationReport {
    pub fn new(query: TrialBalanceQuery, accounts: Vec<MonthlyValuation>) -> Self {
        RevaluationReport {
            id: Uuid::new_v4().to_string(),
            query,
            accounts,
            calculated_at: Utc::now().naive_utc(),
        }
    }

    pub fn empty(query: TrialBalanceQuery) -> Self {
        Self::new(query, Vec::new())
    }
}
