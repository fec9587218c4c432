//! Trial balance aggregation module - leveling, ordering, and combination.

pub mod aggregation;
mod balances_model;
mod cache;
pub mod ordering;

pub use aggregation::{
    apply_average_balances, summarize_to_parents, total_by_currency, total_by_group,
    total_by_side, total_report, CurrencyTotalKey, GroupTotalKey, SideTotalKey,
};
pub use balances_model::TrialBalanceQuery;
pub use cache::{query_fingerprint, BalanceCache};
pub use ordering::{
    account_level, append_report_total, combine_entries_and_report_total,
    combine_with_currency_totals, combine_with_group_totals, combine_with_side_totals,
    order_currency_totals, order_details, order_group_totals, order_side_totals,
    restrict_to_level,
};

#[cfg(test)]
mod aggregation_tests;
