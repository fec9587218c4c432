//! Currency valuation pass.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Datelike, Months, NaiveDate};
use log::debug;
use rust_decimal::Decimal;

use super::valuation_model::ValuedEntry;
use crate::balances::account_level;
use crate::constants::{ACCOUNT_TOTAL_LABEL, DECIMAL_PRECISION, EMPTY_SECTOR};
use crate::entries::{BalanceEntry, ItemType};
use crate::errors::Result;
use crate::fx::{ExchangeRateProviderTrait, RateMap, RateType};

/// Converts multi-currency balances into a common valued representation and
/// computes per-account cross-currency equivalence.
pub struct ValuationService {
    rate_provider: Arc<dyn ExchangeRateProviderTrait>,
}

impl ValuationService {
    pub fn new(rate_provider: Arc<dyn ExchangeRateProviderTrait>) -> Self {
        Self { rate_provider }
    }

    /// Fetches the rate series for `date` as a fail-closed table.
    pub fn rate_map(&self, rate_type: RateType, date: NaiveDate) -> Result<RateMap> {
        let rates = self.rate_provider.get_exchange_rates(rate_type, date)?;
        Ok(RateMap::from_rates(rates, date))
    }

    /// Values `entries` against `header_currency` and emits one extra
    /// per-account equivalence total after each account's rows.
    ///
    /// Every entry's effective rate is its carried rate when present,
    /// otherwise the published (header → entry currency) rate; a currency in
    /// use with no published rate aborts the build. The valued rate of an
    /// entry is its effective rate over the account header's effective rate,
    /// and the equivalence is the current balance at that valued rate.
    pub fn value_entries(
        &self,
        entries: &[BalanceEntry],
        header_currency: &str,
        rate_type: RateType,
        date: NaiveDate,
    ) -> Result<Vec<ValuedEntry>> {
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let rate_map = self.rate_map(rate_type, date)?;

        // Level-1 rows outside sector 00 are summary placeholders whose
        // amounts were already captured at a lower level; they are zeroed so
        // the equivalence totals do not count them twice. Preserved as-is.
        let mut snapshots: Vec<BalanceEntry> = entries.to_vec();
        for snapshot in snapshots.iter_mut() {
            if account_level(&snapshot.account_number) == 1 && snapshot.sector_code != EMPTY_SECTOR
            {
                snapshot.zero_balances();
            }
        }

        let mut by_account: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (index, snapshot) in snapshots.iter().enumerate() {
            by_account
                .entry(snapshot.account_number.clone())
                .or_default()
                .push(index);
        }

        debug!(
            "Valuing {} entries across {} accounts against header currency {}",
            snapshots.len(),
            by_account.len(),
            header_currency
        );

        let mut valued = Vec::with_capacity(snapshots.len() + by_account.len());
        for (account_number, indexes) in &by_account {
            let header_rate = self.header_rate(&snapshots, indexes, header_currency, &rate_map)?;

            let mut account_total = Decimal::ZERO;
            let mut template: Option<&BalanceEntry> = None;
            for &index in indexes {
                let entry = &snapshots[index];
                let effective_rate = effective_rate(entry, header_currency, &rate_map)?;
                let valued_rate = (effective_rate / header_rate).round_dp(DECIMAL_PRECISION);
                let equivalence =
                    (entry.current_balance * valued_rate).round_dp(DECIMAL_PRECISION);
                account_total += equivalence;
                template.get_or_insert(entry);
                valued.push(ValuedEntry::from_entry(
                    entry,
                    effective_rate,
                    valued_rate,
                    equivalence,
                ));
            }

            if let Some(template) = template {
                let mut total_row = ValuedEntry::from_entry(
                    template,
                    header_rate,
                    Decimal::ONE,
                    account_total,
                );
                total_row.item_type = ItemType::BalanceTotalCurrency;
                total_row.currency_code = header_currency.to_string();
                total_row.account_number = account_number.clone();
                total_row.group_name = ACCOUNT_TOTAL_LABEL.to_string();
                total_row.current_balance = Decimal::ZERO;
                valued.push(total_row);
            }
        }

        Ok(valued)
    }

    /// Effective rate of the account's header entry; ONE when the account
    /// has no row in the header currency.
    fn header_rate(
        &self,
        snapshots: &[BalanceEntry],
        indexes: &[usize],
        header_currency: &str,
        rate_map: &RateMap,
    ) -> Result<Decimal> {
        for &index in indexes {
            let entry = &snapshots[index];
            if entry.currency_code == header_currency {
                return effective_rate(entry, header_currency, rate_map);
            }
        }
        Ok(Decimal::ONE)
    }
}

fn effective_rate(
    entry: &BalanceEntry,
    header_currency: &str,
    rate_map: &RateMap,
) -> Result<Decimal> {
    if !entry.exchange_rate.is_zero() {
        return Ok(entry.exchange_rate);
    }
    rate_map.get(header_currency, &entry.currency_code)
}

/// Splits a date range into calendar-month windows, both ends clamped to
/// the range.
pub fn month_windows(from: NaiveDate, to: NaiveDate) -> Vec<(NaiveDate, NaiveDate)> {
    let mut windows = Vec::new();
    let mut start = from;
    while start <= to {
        let next_month = match start
            .with_day(1)
            .and_then(|d| d.checked_add_months(Months::new(1)))
        {
            Some(date) => date,
            None => break,
        };
        let month_end = match next_month.pred_opt() {
            Some(date) => date,
            None => break,
        };
        windows.push((start, month_end.min(to)));
        start = next_month;
    }
    windows
}
