//! Balance entry domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Natural balance sign of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtorCreditor {
    Deudora,
    Acreedora,
}

impl DebtorCreditor {
    /// Sort ordinal. Report orderings are descending on this value, which
    /// places debtor entries before creditor entries.
    pub fn ordinal(&self) -> u8 {
        match self {
            DebtorCreditor::Deudora => 2,
            DebtorCreditor::Acreedora => 1,
        }
    }

    /// Plural label used in side-total group names.
    pub fn plural_label(&self) -> &'static str {
        match self {
            DebtorCreditor::Deudora => "DEUDORAS",
            DebtorCreditor::Acreedora => "ACREEDORAS",
        }
    }
}

/// Classification of a row in the final report list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    /// A posted detail entry.
    Entry,
    /// A parent-account summary over its subaccounts.
    Summary,
    /// Per-account subtotal, debtor side.
    BalanceTotalGroupDebtor,
    /// Per-account subtotal, creditor side.
    BalanceTotalGroupCreditor,
    /// Report-wide debtor subtotal for one currency.
    BalanceTotalDebtor,
    /// Report-wide creditor subtotal for one currency.
    BalanceTotalCreditor,
    /// Net position of one currency.
    BalanceTotalCurrency,
    /// The single report-wide total.
    BalanceTotalConsolidated,
    Total,
}

impl ItemType {
    pub fn is_detail(&self) -> bool {
        matches!(self, ItemType::Entry | ItemType::Summary)
    }

    pub fn is_total(&self) -> bool {
        !matches!(self, ItemType::Entry | ItemType::Summary)
    }
}

/// One balance line or summary row.
///
/// Detail entries are read once from the data source and never mutated except
/// to attach the parent-classification flag. Summary entries are created on
/// demand inside a keyed table and accumulated in place; they live only for
/// the duration of one report build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceEntry {
    pub item_type: ItemType,
    pub ledger_number: String,
    pub currency_code: String,
    pub account_number: String,
    pub sector_code: String,
    pub debtor_creditor: DebtorCreditor,

    /// Synthetic group number of a summary row; the account number it totals.
    pub group_number: String,
    /// Synthetic label of a summary row.
    pub group_name: String,

    pub initial_balance: Decimal,
    pub debit: Decimal,
    pub credit: Decimal,
    pub current_balance: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_balance: Option<Decimal>,
    pub exchange_rate: Decimal,
    pub second_exchange_rate: Decimal,

    pub has_parent_posting_entry: bool,
    pub is_parent_posting_entry: bool,

    /// Latest date any contributing entry changed; drives the
    /// average-balance day count.
    pub last_change_date: NaiveDate,
}

impl BalanceEntry {
    /// Creates a summary row that copies the grouping fields of `source`
    /// with all numeric fields at zero.
    pub fn summary_from(
        source: &BalanceEntry,
        item_type: ItemType,
        group_number: &str,
        group_name: &str,
    ) -> Self {
        BalanceEntry {
            item_type,
            ledger_number: source.ledger_number.clone(),
            currency_code: source.currency_code.clone(),
            account_number: group_number.to_string(),
            sector_code: source.sector_code.clone(),
            debtor_creditor: source.debtor_creditor,
            group_number: group_number.to_string(),
            group_name: group_name.to_string(),
            initial_balance: Decimal::ZERO,
            debit: Decimal::ZERO,
            credit: Decimal::ZERO,
            current_balance: Decimal::ZERO,
            average_balance: None,
            exchange_rate: source.exchange_rate,
            second_exchange_rate: source.second_exchange_rate,
            has_parent_posting_entry: false,
            is_parent_posting_entry: false,
            last_change_date: source.last_change_date,
        }
    }

    /// The additive merge: adds the four balance numerics of `other` into
    /// this entry and advances `last_change_date` to the maximum of both.
    ///
    /// Associative and commutative over entries sharing a grouping key.
    pub fn accumulate(&mut self, other: &BalanceEntry) {
        self.initial_balance += other.initial_balance;
        self.debit += other.debit;
        self.credit += other.credit;
        self.current_balance += other.current_balance;
        if other.last_change_date > self.last_change_date {
            self.last_change_date = other.last_change_date;
        }
    }

    /// Returns a copy with `initial_balance` and `current_balance` negated.
    /// Used when a creditor subtotal is folded into a currency net position.
    pub fn negated_balances(&self) -> Self {
        let mut negated = self.clone();
        negated.initial_balance = -self.initial_balance;
        negated.current_balance = -self.current_balance;
        negated
    }

    /// Zeroes every numeric field in place.
    pub fn zero_balances(&mut self) {
        self.initial_balance = Decimal::ZERO;
        self.debit = Decimal::ZERO;
        self.credit = Decimal::ZERO;
        self.current_balance = Decimal::ZERO;
        self.average_balance = None;
    }
}
