//! Currency code helpers.
//!
//! The chart of currencies uses two-digit regulatory codes, not ISO codes.

use crate::constants::{DOLLAR_CURRENCY, DOMESTIC_CURRENCY};

/// Full name of a currency code as printed on currency-total rows.
/// Unknown codes fall back to the code itself.
pub fn currency_full_name(code: &str) -> &str {
    match code {
        "01" => "MONEDA NACIONAL",
        "02" => "DOLARES",
        "06" => "UDIS",
        "14" => "EUROS",
        "28" => "YENES",
        other => other,
    }
}

pub fn is_domestic(code: &str) -> bool {
    code == DOMESTIC_CURRENCY
}

pub fn is_dollar(code: &str) -> bool {
    code == DOLLAR_CURRENCY
}
