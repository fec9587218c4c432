//! Valuation module - currency conversion of balances.

mod valuation_model;
mod valuation_service;

pub use valuation_model::{MonthlyValuation, ValuedEntry};
pub use valuation_service::{month_windows, ValuationService};
