//! Balanza Valorizada builder.

use std::sync::Arc;

use log::debug;

use super::reports_model::ValuedTrialBalance;
use crate::balances::{order_details, TrialBalanceQuery};
use crate::constants::{DOLLAR_CURRENCY, DOMESTIC_CURRENCY};
use crate::entries::EntryRepositoryTrait;
use crate::errors::Result;
use crate::fx::ExchangeRateProviderTrait;
use crate::valuation::ValuationService;

/// Builds the valued trial balance: the dollarized view of the period's
/// balances plus per-account cross-currency equivalence totals.
pub struct ValuedBalanceService {
    entry_repository: Arc<dyn EntryRepositoryTrait>,
    valuation_service: ValuationService,
}

impl ValuedBalanceService {
    pub fn new(
        entry_repository: Arc<dyn EntryRepositoryTrait>,
        rate_provider: Arc<dyn ExchangeRateProviderTrait>,
    ) -> Self {
        Self {
            entry_repository,
            valuation_service: ValuationService::new(rate_provider),
        }
    }

    /// Dollar-header valuation.
    pub fn build(&self, query: &TrialBalanceQuery) -> Result<ValuedTrialBalance> {
        self.build_with_header(query, DOLLAR_CURRENCY)
    }

    /// Column-by-currency variant valued against the domestic currency.
    pub fn build_domestic(&self, query: &TrialBalanceQuery) -> Result<ValuedTrialBalance> {
        self.build_with_header(query, DOMESTIC_CURRENCY)
    }

    fn build_with_header(
        &self,
        query: &TrialBalanceQuery,
        header_currency: &str,
    ) -> Result<ValuedTrialBalance> {
        let mut details = self.entry_repository.get_balance_entries(query)?;
        if details.is_empty() {
            debug!(
                "No balance entries between {} and {}; returning empty valued report",
                query.from_date, query.to_date
            );
            return Ok(ValuedTrialBalance::empty(query.clone()));
        }
        debug!(
            "Building valued balance over {} entries, header currency {}",
            details.len(),
            header_currency
        );

        order_details(&mut details);
        let valued = self.valuation_service.value_entries(
            &details,
            header_currency,
            query.exchange_rate_type,
            query.exchange_rate_date(),
        )?;

        Ok(ValuedTrialBalance::new(query.clone(), valued))
    }
}
