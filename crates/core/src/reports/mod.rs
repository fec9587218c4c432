//! Report builders - one fixed helper pipeline per trial balance variant.

mod cascade_service;
mod reports_model;
mod revaluation_service;
mod traditional_service;
mod valued_service;

pub use cascade_service::CascadeBalanceService;
pub use reports_model::{RevaluationReport, TrialBalance, ValuedTrialBalance};
pub use revaluation_service::RevaluationService;
pub use traditional_service::TraditionalBalanceService;
pub use valued_service::ValuedBalanceService;
