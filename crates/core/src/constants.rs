/// Sector code meaning "no sector".
pub const EMPTY_SECTOR: &str = "00";

/// Code of the domestic currency (moneda nacional).
pub const DOMESTIC_CURRENCY: &str = "01";

/// Code of the dollar currency, the valuation header for the dollarized report.
pub const DOLLAR_CURRENCY: &str = "02";

/// Group name stamped on per-account subtotal rows.
pub const GROUP_SUMMARY_LABEL: &str = "SUMA DE DELEGACIONES";

/// Label of the single report-wide total row.
pub const REPORT_TOTAL_LABEL: &str = "TOTAL DEL REPORTE";

/// Label of the per-account cross-currency equivalence total rows.
pub const ACCOUNT_TOTAL_LABEL: &str = "TOTAL POR CUENTA";

/// Decimal precision for valued figures.
pub const DECIMAL_PRECISION: u32 = 6;
