//! Balanza con Contabilidades en Cascada builder.

use std::sync::Arc;

use log::debug;

use super::reports_model::TrialBalance;
use crate::balances::{
    append_report_total, apply_average_balances, combine_with_currency_totals,
    combine_with_group_totals, combine_with_side_totals, order_details, restrict_to_level,
    summarize_to_parents, total_by_currency, total_by_group, total_by_side, total_report,
    TrialBalanceQuery,
};
use crate::entries::EntryRepositoryTrait;
use crate::errors::Result;

/// Builds the cascaded trial balance: several ledgers over one chart of
/// accounts, with subledger details folded into their parent posting
/// entries and per-account subtotals summed across ledgers.
#[derive(Clone)]
pub struct CascadeBalanceService {
    entry_repository: Arc<dyn EntryRepositoryTrait>,
}

impl CascadeBalanceService {
    pub fn new(entry_repository: Arc<dyn EntryRepositoryTrait>) -> Self {
        Self { entry_repository }
    }

    pub fn build(&self, query: &TrialBalanceQuery) -> Result<TrialBalance> {
        let details = self.entry_repository.get_balance_entries(query)?;
        if details.is_empty() {
            debug!(
                "No balance entries between {} and {}; returning empty report",
                query.from_date, query.to_date
            );
            return Ok(TrialBalance::empty(query.clone()));
        }
        debug!(
            "Building cascade balance over {} entries, {} ledgers in scope",
            details.len(),
            query.ledgers.len()
        );

        let mut details = summarize_to_parents(details, query.with_subledger_accounts);
        order_details(&mut details);

        let group_totals = total_by_group(&details);
        let side_totals = total_by_side(&details);
        let currency_totals = total_by_currency(&side_totals)?;
        let report_total = total_report(&currency_totals);

        let mut rows = combine_with_group_totals(details, group_totals);
        rows = combine_with_side_totals(rows, side_totals);
        rows = combine_with_currency_totals(rows, currency_totals);
        append_report_total(&mut rows, report_total);

        if query.with_average_balance {
            apply_average_balances(&mut rows, query.to_date);
        }
        let rows = restrict_to_level(rows, query.level);

        Ok(TrialBalance::new(query.clone(), rows))
    }
}
