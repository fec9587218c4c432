//! Balance entry module - domain models and data-access seam.

mod entry_model;
mod entry_traits;

pub use entry_model::{BalanceEntry, DebtorCreditor, ItemType};
pub use entry_traits::EntryRepositoryTrait;

#[cfg(test)]
mod entry_model_tests;
