//! Balanza Core - trial balance aggregation engine.
//!
//! This crate contains the balance engine for the accounting back office:
//! the leveling passes that fold flat posted balance entries into
//! account, debtor/creditor, currency, and report subtotals, the currency
//! valuation passes, and the report builders that sequence them.
//! It is storage-agnostic: detail entries and exchange rates arrive through
//! traits implemented by the data-access layer.

pub mod balances;
pub mod constants;
pub mod entries;
pub mod errors;
pub mod fx;
pub mod reports;
pub mod valuation;

// Re-export the aggregation surface and the report builders
pub use balances::*;
pub use entries::*;
pub use reports::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
