//! Canonical orderings and the summary/detail interleave.
//!
//! Sorts are stable so rows that compare equal keep their source order.
//! Combination walks the totals in their own canonical order, pulls each
//! total's constituent rows into a block, and appends the total after the
//! block.

use std::cmp::Ordering;

use crate::entries::{BalanceEntry, ItemType};
use crate::errors::{EngineError, Result};

/// Detail order: currency, account, sector, debtor before creditor, ledger.
pub fn order_details(entries: &mut [BalanceEntry]) {
    entries.sort_by(|a, b| {
        a.currency_code
            .cmp(&b.currency_code)
            .then_with(|| a.account_number.cmp(&b.account_number))
            .then_with(|| a.sector_code.cmp(&b.sector_code))
            .then_with(|| side_descending(a, b))
            .then_with(|| a.ledger_number.cmp(&b.ledger_number))
    });
}

/// Per-account subtotal order: currency, group number, sector.
pub fn order_group_totals(entries: &mut [BalanceEntry]) {
    entries.sort_by(|a, b| {
        a.currency_code
            .cmp(&b.currency_code)
            .then_with(|| a.group_number.cmp(&b.group_number))
            .then_with(|| a.sector_code.cmp(&b.sector_code))
            .then_with(|| side_descending(a, b))
    });
}

/// Debtor/creditor subtotal order: currency, then debtor before creditor.
pub fn order_side_totals(entries: &mut [BalanceEntry]) {
    entries.sort_by(|a, b| {
        a.currency_code
            .cmp(&b.currency_code)
            .then_with(|| side_descending(a, b))
    });
}

pub fn order_currency_totals(entries: &mut [BalanceEntry]) {
    entries.sort_by(|a, b| a.currency_code.cmp(&b.currency_code));
}

fn side_descending(a: &BalanceEntry, b: &BalanceEntry) -> Ordering {
    b.debtor_creditor
        .ordinal()
        .cmp(&a.debtor_creditor.ordinal())
}

/// Interleaves per-account subtotals after their detail rows.
pub fn combine_with_group_totals(
    details: Vec<BalanceEntry>,
    mut totals: Vec<BalanceEntry>,
) -> Vec<BalanceEntry> {
    if totals.is_empty() {
        return details;
    }
    order_group_totals(&mut totals);
    combine_rows(details, totals, |row, total| {
        row.currency_code == total.currency_code
            && row.sector_code == total.sector_code
            && row.debtor_creditor == total.debtor_creditor
            && row.account_number == total.group_number
    })
}

/// Interleaves debtor/creditor subtotals after all rows of their currency
/// and side, per-account subtotals included.
pub fn combine_with_side_totals(
    rows: Vec<BalanceEntry>,
    mut totals: Vec<BalanceEntry>,
) -> Vec<BalanceEntry> {
    if totals.is_empty() {
        return rows;
    }
    order_side_totals(&mut totals);
    combine_rows(rows, totals, |row, total| {
        row.currency_code == total.currency_code && row.debtor_creditor == total.debtor_creditor
    })
}

/// Interleaves currency net-position rows after all rows of their currency.
pub fn combine_with_currency_totals(
    rows: Vec<BalanceEntry>,
    mut totals: Vec<BalanceEntry>,
) -> Vec<BalanceEntry> {
    if totals.is_empty() {
        return rows;
    }
    order_currency_totals(&mut totals);
    combine_rows(rows, totals, |row, total| {
        row.currency_code == total.currency_code
    })
}

/// The report total is always appended, matching rows or not.
pub fn append_report_total(rows: &mut Vec<BalanceEntry>, report_total: Option<BalanceEntry>) {
    if let Some(total) = report_total {
        rows.push(total);
    }
}

/// Interleave of detail entries against the report total alone. No report
/// variant sequences this yet; reaching it is a programming error.
pub fn combine_entries_and_report_total(
    _entries: Vec<BalanceEntry>,
    _report_total: Option<BalanceEntry>,
) -> Result<Vec<BalanceEntry>> {
    Err(EngineError::NotImplemented("combine_entries_and_report_total").into())
}

fn combine_rows<F>(rows: Vec<BalanceEntry>, totals: Vec<BalanceEntry>, matcher: F) -> Vec<BalanceEntry>
where
    F: Fn(&BalanceEntry, &BalanceEntry) -> bool,
{
    let mut slots: Vec<Option<BalanceEntry>> = rows.into_iter().map(Some).collect();
    let mut combined = Vec::with_capacity(slots.len() + totals.len());

    for total in totals {
        let block_start = combined.len();
        for slot in slots.iter_mut() {
            if slot.as_ref().is_some_and(|row| matcher(row, &total)) {
                if let Some(row) = slot.take() {
                    combined.push(row);
                }
            }
        }
        if combined.len() == block_start {
            // no constituents: dropped
            log::debug!(
                "Dropping {:?} summary {} with no matching rows",
                total.item_type,
                total.group_name
            );
            continue;
        }
        combined.push(total);
    }

    combined
}

/// Account level by its number: two digits per level, trailing "00" pairs
/// not significant.
pub fn account_level(account_number: &str) -> u32 {
    let trimmed = account_number.trim_end_matches("00");
    (trimmed.len() as u32).div_ceil(2)
}

/// Keeps rows at or above the requested account level. Level 0 keeps
/// everything; currency and report totals always stay.
pub fn restrict_to_level(entries: Vec<BalanceEntry>, level: u32) -> Vec<BalanceEntry> {
    if level == 0 {
        return entries;
    }
    entries
        .into_iter()
        .filter(|entry| match entry.item_type {
            ItemType::Entry | ItemType::Summary => account_level(&entry.account_number) <= level,
            ItemType::BalanceTotalGroupDebtor | ItemType::BalanceTotalGroupCreditor => {
                account_level(&entry.group_number) <= level
            }
            _ => true,
        })
        .collect()
}
