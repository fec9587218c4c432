//! Valorización builder - monthly revaluation roll-up.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Datelike;
use log::debug;

use super::reports_model::RevaluationReport;
use crate::balances::TrialBalanceQuery;
use crate::constants::{DECIMAL_PRECISION, DOMESTIC_CURRENCY};
use crate::entries::EntryRepositoryTrait;
use crate::errors::{Error, Result};
use crate::fx::{is_domestic, ExchangeRateProviderTrait};
use crate::valuation::{month_windows, MonthlyValuation, ValuationService};

/// Builds the month-by-month revaluation of foreign-currency balances: for
/// each calendar month in the query range, the month's balances are
/// revalued at the spread between that month's and the prior month's
/// published rates, and a running total accumulates per account across
/// months.
pub struct RevaluationService {
    entry_repository: Arc<dyn EntryRepositoryTrait>,
    valuation_service: ValuationService,
}

impl RevaluationService {
    pub fn new(
        entry_repository: Arc<dyn EntryRepositoryTrait>,
        rate_provider: Arc<dyn ExchangeRateProviderTrait>,
    ) -> Self {
        Self {
            entry_repository,
            valuation_service: ValuationService::new(rate_provider),
        }
    }

    pub fn build(&self, query: &TrialBalanceQuery) -> Result<RevaluationReport> {
        let windows = month_windows(query.from_date, query.to_date);
        if windows.is_empty() {
            return Ok(RevaluationReport::empty(query.clone()));
        }

        // account, sector, currency -> monthly figures
        let mut accounts: BTreeMap<(String, String, String), MonthlyValuation> = BTreeMap::new();

        for (window_start, window_end) in windows {
            let mut month_query = query.clone();
            month_query.from_date = window_start;
            month_query.to_date = window_end;

            let entries = self.entry_repository.get_balance_entries(&month_query)?;
            if entries.is_empty() {
                debug!(
                    "No balance entries between {} and {}; month skipped",
                    window_start, window_end
                );
                continue;
            }

            let month_start = window_start.with_day(1).ok_or_else(|| {
                Error::Validation(format!("Invalid month start for {}", window_start))
            })?;
            let prior_month_end = month_start.pred_opt().ok_or_else(|| {
                Error::Validation(format!("No prior month before {}", month_start))
            })?;

            let rates_current = self
                .valuation_service
                .rate_map(query.exchange_rate_type, window_end)?;
            let rates_prior = self
                .valuation_service
                .rate_map(query.exchange_rate_type, prior_month_end)?;

            for entry in entries.iter().filter(|e| e.item_type.is_detail()) {
                if is_domestic(&entry.currency_code) {
                    continue;
                }
                let rate_now = rates_current.get(DOMESTIC_CURRENCY, &entry.currency_code)?;
                let rate_prior = rates_prior.get(DOMESTIC_CURRENCY, &entry.currency_code)?;
                let value = (entry.current_balance * (rate_now - rate_prior))
                    .round_dp(DECIMAL_PRECISION);

                accounts
                    .entry((
                        entry.account_number.clone(),
                        entry.sector_code.clone(),
                        entry.currency_code.clone(),
                    ))
                    .or_insert_with(|| {
                        MonthlyValuation::new(
                            &entry.account_number,
                            &entry.sector_code,
                            &entry.currency_code,
                        )
                    })
                    .record_month(month_start, value);
            }
        }

        Ok(RevaluationReport::new(
            query.clone(),
            accounts.into_values().collect(),
        ))
    }
}
