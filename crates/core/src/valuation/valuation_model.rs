//! Valued entry domain models.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::entries::{BalanceEntry, DebtorCreditor, ItemType};

/// Read-only snapshot of a balance entry plus its conversion figures.
/// Produced once per valuation pass and never mutated afterward.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuedEntry {
    pub item_type: ItemType,
    pub ledger_number: String,
    pub currency_code: String,
    pub account_number: String,
    pub sector_code: String,
    pub debtor_creditor: DebtorCreditor,
    pub group_name: String,

    pub current_balance: Decimal,
    /// Rate of the entry's currency as published for the valuation date.
    pub exchange_rate: Decimal,
    /// Entry rate over the header-currency rate.
    pub valued_exchange_rate: Decimal,
    /// Current balance expressed in the valuation target currency.
    pub total_equivalence: Decimal,
}

impl ValuedEntry {
    pub fn from_entry(
        entry: &BalanceEntry,
        exchange_rate: Decimal,
        valued_exchange_rate: Decimal,
        total_equivalence: Decimal,
    ) -> Self {
        ValuedEntry {
            item_type: entry.item_type,
            ledger_number: entry.ledger_number.clone(),
            currency_code: entry.currency_code.clone(),
            account_number: entry.account_number.clone(),
            sector_code: entry.sector_code.clone(),
            debtor_creditor: entry.debtor_creditor,
            group_name: entry.group_name.clone(),
            current_balance: entry.current_balance,
            exchange_rate,
            valued_exchange_rate,
            total_equivalence,
        }
    }
}

/// One account's month-by-month revaluation figures.
///
/// `totals_by_month` is keyed by the first day of each month; iteration is
/// chronological by construction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyValuation {
    pub account_number: String,
    pub sector_code: String,
    pub currency_code: String,
    pub totals_by_month: BTreeMap<NaiveDate, Decimal>,
    /// Running sum of the monthly figures across the whole range.
    pub total_accumulated: Decimal,
}

impl MonthlyValuation {
    pub fn new(account_number: &str, sector_code: &str, currency_code: &str) -> Self {
        MonthlyValuation {
            account_number: account_number.to_string(),
            sector_code: sector_code.to_string(),
            currency_code: currency_code.to_string(),
            totals_by_month: BTreeMap::new(),
            total_accumulated: Decimal::ZERO,
        }
    }

    pub fn record_month(&mut self, month_start: NaiveDate, value: Decimal) {
        *self
            .totals_by_month
            .entry(month_start)
            .or_insert(Decimal::ZERO) += value;
        self.total_accumulated += value;
    }
}
