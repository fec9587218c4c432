//! Leveling passes that fold detail entries into summary tables.
//!
//! Every pass shares one merge discipline: look the composite key up in a
//! summary table, create the summary row on first sight, then add the
//! source numerics in. Distinct entries mapping to the same key always merge
//! into exactly one row; this is what prevents duplicate totals.

use std::collections::hash_map::Entry as MapEntry;
use std::collections::HashMap;
use std::hash::Hash;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::constants::{GROUP_SUMMARY_LABEL, REPORT_TOTAL_LABEL};
use crate::entries::{BalanceEntry, DebtorCreditor, ItemType};
use crate::errors::{EngineError, Result};
use crate::fx::currency_full_name;

/// Key of a per-account subtotal: one row per account per sector per side
/// within a currency, summed across ledgers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupTotalKey {
    pub currency_code: String,
    pub group_number: String,
    pub sector_code: String,
    pub side: DebtorCreditor,
}

/// Key of a report-wide debtor/creditor subtotal within a currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SideTotalKey {
    pub currency_code: String,
    pub side: DebtorCreditor,
}

/// Key of the net position of one currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyTotalKey {
    pub currency_code: String,
}

/// Keyed table of summary rows under construction.
struct SummaryTable<K> {
    entries: HashMap<K, BalanceEntry>,
}

impl<K: Eq + Hash> SummaryTable<K> {
    fn new() -> Self {
        SummaryTable {
            entries: HashMap::new(),
        }
    }

    /// The get-or-increase primitive: absent key creates the summary row
    /// from the source's grouping fields, present key accumulates into the
    /// existing row. Never fails.
    fn accumulate(
        &mut self,
        key: K,
        source: &BalanceEntry,
        item_type: ItemType,
        group_number: &str,
        group_name: &str,
    ) {
        match self.entries.entry(key) {
            MapEntry::Occupied(mut occupied) => occupied.get_mut().accumulate(source),
            MapEntry::Vacant(vacant) => {
                let mut summary =
                    BalanceEntry::summary_from(source, item_type, group_number, group_name);
                summary.accumulate(source);
                vacant.insert(summary);
            }
        }
    }

    fn into_entries(self) -> Vec<BalanceEntry> {
        self.entries.into_values().collect()
    }
}

/// A row participates in totals when it is a detail (posted entry or parent
/// summary) at the top of the account hierarchy. Subledger rows are skipped
/// so amounts are not counted twice through their parents.
fn aggregable(entry: &BalanceEntry) -> bool {
    entry.item_type.is_detail() && !entry.has_parent_posting_entry
}

/// Level 1: per-account subtotals, one per {currency, account, sector, side}.
pub fn total_by_group(entries: &[BalanceEntry]) -> Vec<BalanceEntry> {
    let mut table = SummaryTable::new();
    for entry in entries.iter().filter(|e| aggregable(e)) {
        let item_type = match entry.debtor_creditor {
            DebtorCreditor::Deudora => ItemType::BalanceTotalGroupDebtor,
            DebtorCreditor::Acreedora => ItemType::BalanceTotalGroupCreditor,
        };
        let key = GroupTotalKey {
            currency_code: entry.currency_code.clone(),
            group_number: entry.account_number.clone(),
            sector_code: entry.sector_code.clone(),
            side: entry.debtor_creditor,
        };
        table.accumulate(
            key,
            entry,
            item_type,
            &entry.account_number,
            GROUP_SUMMARY_LABEL,
        );
    }
    table.into_entries()
}

/// Level 2: report-wide debtor/creditor subtotals, one per {currency, side}.
pub fn total_by_side(entries: &[BalanceEntry]) -> Vec<BalanceEntry> {
    let mut table = SummaryTable::new();
    for entry in entries.iter().filter(|e| aggregable(e)) {
        let item_type = match entry.debtor_creditor {
            DebtorCreditor::Deudora => ItemType::BalanceTotalDebtor,
            DebtorCreditor::Acreedora => ItemType::BalanceTotalCreditor,
        };
        let key = SideTotalKey {
            currency_code: entry.currency_code.clone(),
            side: entry.debtor_creditor,
        };
        let group_name = format!(
            "TOTAL {} {}",
            entry.debtor_creditor.plural_label(),
            entry.currency_code
        );
        table.accumulate(key, entry, item_type, &entry.currency_code, &group_name);
    }
    table.into_entries()
}

/// Level 3: net position per currency, folded from the side subtotals.
///
/// Creditor subtotals enter with their initial and current balances negated:
/// creditor balances subtract from the net currency position. Debits and
/// credits keep their sign.
pub fn total_by_currency(side_totals: &[BalanceEntry]) -> Result<Vec<BalanceEntry>> {
    let mut table = SummaryTable::new();
    for total in side_totals {
        let contribution = match total.item_type {
            ItemType::BalanceTotalDebtor => total.clone(),
            ItemType::BalanceTotalCreditor => total.negated_balances(),
            other => {
                return Err(EngineError::UnhandledItemType {
                    item_type: other,
                    operation: "total_by_currency",
                }
                .into())
            }
        };
        let key = CurrencyTotalKey {
            currency_code: total.currency_code.clone(),
        };
        let group_name = format!("TOTAL MONEDA {}", currency_full_name(&total.currency_code));
        table.accumulate(
            key,
            &contribution,
            ItemType::BalanceTotalCurrency,
            &total.currency_code,
            &group_name,
        );
    }
    Ok(table.into_entries())
}

/// Level 4: the single report total, folded from the currency subtotals.
/// Returns `None` for an empty report.
pub fn total_report(currency_totals: &[BalanceEntry]) -> Option<BalanceEntry> {
    let mut report_total: Option<BalanceEntry> = None;
    for total in currency_totals {
        match report_total.as_mut() {
            Some(accumulated) => accumulated.accumulate(total),
            None => {
                let mut row = BalanceEntry::summary_from(
                    total,
                    ItemType::BalanceTotalConsolidated,
                    "",
                    REPORT_TOTAL_LABEL,
                );
                row.accumulate(total);
                report_total = Some(row);
            }
        }
    }
    report_total
}

/// Attaches the time-weighted average balance to every per-account subtotal.
///
/// `average = (days × net) / period_end.day() + initial_balance`, where
/// `days` counts from the subtotal's last change date through the period end
/// inclusive, and `net` is the movement in the account's natural direction.
/// This is the day-weighted-movement approximation the regulator receives;
/// it is kept exactly as-is, not replaced with a daily integral.
pub fn apply_average_balances(entries: &mut [BalanceEntry], period_end: NaiveDate) {
    for entry in entries.iter_mut() {
        let net = match entry.item_type {
            ItemType::BalanceTotalGroupDebtor => entry.debit - entry.credit,
            ItemType::BalanceTotalGroupCreditor => entry.credit - entry.debit,
            _ => continue,
        };
        let days = (period_end - entry.last_change_date).num_days() + 1;
        let average = (Decimal::from(days) * net) / Decimal::from(period_end.day())
            + entry.initial_balance;
        entry.average_balance = Some(average);
    }
}

#[derive(PartialEq, Eq, Hash)]
struct ParentScope {
    ledger_number: String,
    currency_code: String,
    sector_code: String,
    side: DebtorCreditor,
}

/// Folds subledger-account rows into their parent posting entries.
///
/// A child matches the parent with the longest account-number prefix inside
/// the same {ledger, currency, sector, side} scope. Parents that absorb at
/// least one child are retagged [`ItemType::Summary`]. When
/// `keep_subledger_details` is false the absorbed children are removed from
/// the list; otherwise they stay as rows (still excluded from totals by
/// their parent flag).
pub fn summarize_to_parents(
    mut entries: Vec<BalanceEntry>,
    keep_subledger_details: bool,
) -> Vec<BalanceEntry> {
    if !entries.iter().any(|e| e.is_parent_posting_entry) {
        return entries;
    }

    let mut parents: HashMap<ParentScope, Vec<usize>> = HashMap::new();
    for (index, entry) in entries.iter().enumerate() {
        if entry.is_parent_posting_entry {
            parents
                .entry(ParentScope {
                    ledger_number: entry.ledger_number.clone(),
                    currency_code: entry.currency_code.clone(),
                    sector_code: entry.sector_code.clone(),
                    side: entry.debtor_creditor,
                })
                .or_default()
                .push(index);
        }
    }

    let mut absorptions: Vec<(usize, usize)> = Vec::new(); // (parent, child)
    for (index, entry) in entries.iter().enumerate() {
        if !entry.has_parent_posting_entry {
            continue;
        }
        let scope = ParentScope {
            ledger_number: entry.ledger_number.clone(),
            currency_code: entry.currency_code.clone(),
            sector_code: entry.sector_code.clone(),
            side: entry.debtor_creditor,
        };
        let parent = parents.get(&scope).and_then(|candidates| {
            candidates
                .iter()
                .copied()
                .filter(|&p| {
                    p != index && entry.account_number.starts_with(&entries[p].account_number)
                })
                .max_by_key(|&p| entries[p].account_number.len())
        });
        match parent {
            Some(parent_index) => absorptions.push((parent_index, index)),
            None => log::warn!(
                "Subledger account {} has no parent posting entry in scope; left as-is",
                entry.account_number
            ),
        }
    }

    for &(parent_index, child_index) in &absorptions {
        let child = entries[child_index].clone();
        let parent = &mut entries[parent_index];
        parent.accumulate(&child);
        parent.item_type = ItemType::Summary;
    }

    if !keep_subledger_details {
        let absorbed: std::collections::HashSet<usize> =
            absorptions.iter().map(|&(_, child)| child).collect();
        let mut index = 0;
        entries.retain(|_| {
            let keep = !absorbed.contains(&index);
            index += 1;
            keep
        });
    }

    entries
}
