use crate::balances::TrialBalanceQuery;
use crate::entries::BalanceEntry;
use crate::errors::Result;

/// Contract for the data-access layer that supplies posted balance entries.
///
/// Implementations live outside this crate; the engine only requires that
/// entries for the query period and scope arrive fully materialized. The
/// returned collection may be in any order.
pub trait EntryRepositoryTrait: Send + Sync {
    fn get_balance_entries(&self, query: &TrialBalanceQuery) -> Result<Vec<BalanceEntry>>;
}
