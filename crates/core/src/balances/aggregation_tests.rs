use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::balances::aggregation::{
    apply_average_balances, summarize_to_parents, total_by_currency, total_by_group,
    total_by_side, total_report,
};
use crate::entries::{BalanceEntry, DebtorCreditor, ItemType};

fn entry(
    currency: &str,
    account: &str,
    sector: &str,
    side: DebtorCreditor,
    current: Decimal,
) -> BalanceEntry {
    BalanceEntry {
        item_type: ItemType::Entry,
        ledger_number: "001".to_string(),
        currency_code: currency.to_string(),
        account_number: account.to_string(),
        sector_code: sector.to_string(),
        debtor_creditor: side,
        group_number: String::new(),
        group_name: String::new(),
        initial_balance: Decimal::ZERO,
        debit: Decimal::ZERO,
        credit: Decimal::ZERO,
        current_balance: current,
        average_balance: None,
        exchange_rate: Decimal::ZERO,
        second_exchange_rate: Decimal::ZERO,
        has_parent_posting_entry: false,
        is_parent_posting_entry: false,
        last_change_date: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
    }
}

fn worked_scenario() -> Vec<BalanceEntry> {
    vec![
        entry("01", "1001", "00", DebtorCreditor::Deudora, dec!(300)),
        entry("01", "1001", "00", DebtorCreditor::Deudora, dec!(200)),
        entry("01", "2001", "00", DebtorCreditor::Acreedora, dec!(150)),
    ]
}

#[test]
fn group_totals_merge_same_key_entries_into_one_row() {
    let totals = total_by_group(&worked_scenario());

    assert_eq!(totals.len(), 2);
    let debtor = totals
        .iter()
        .find(|t| t.item_type == ItemType::BalanceTotalGroupDebtor)
        .unwrap();
    assert_eq!(debtor.group_number, "1001");
    assert_eq!(debtor.group_name, "SUMA DE DELEGACIONES");
    assert_eq!(debtor.current_balance, dec!(500));

    let creditor = totals
        .iter()
        .find(|t| t.item_type == ItemType::BalanceTotalGroupCreditor)
        .unwrap();
    assert_eq!(creditor.group_number, "2001");
    assert_eq!(creditor.current_balance, dec!(150));
}

#[test]
fn side_totals_split_by_currency_and_side() {
    let totals = total_by_side(&worked_scenario());

    assert_eq!(totals.len(), 2);
    let debtor = totals
        .iter()
        .find(|t| t.item_type == ItemType::BalanceTotalDebtor)
        .unwrap();
    assert_eq!(debtor.group_name, "TOTAL DEUDORAS 01");
    assert_eq!(debtor.current_balance, dec!(500));

    let creditor = totals
        .iter()
        .find(|t| t.item_type == ItemType::BalanceTotalCreditor)
        .unwrap();
    assert_eq!(creditor.group_name, "TOTAL ACREEDORAS 01");
    assert_eq!(creditor.current_balance, dec!(150));
}

#[test]
fn side_totals_skip_subledger_rows() {
    let mut entries = worked_scenario();
    let mut subledger = entry("01", "100101", "00", DebtorCreditor::Deudora, dec!(999));
    subledger.has_parent_posting_entry = true;
    entries.push(subledger);

    let totals = total_by_side(&entries);
    let debtor = totals
        .iter()
        .find(|t| t.item_type == ItemType::BalanceTotalDebtor)
        .unwrap();
    assert_eq!(debtor.current_balance, dec!(500));
}

#[test]
fn currency_fold_negates_creditor_balances() {
    let side_totals = total_by_side(&worked_scenario());
    let currency_totals = total_by_currency(&side_totals).unwrap();

    assert_eq!(currency_totals.len(), 1);
    let total = &currency_totals[0];
    assert_eq!(total.item_type, ItemType::BalanceTotalCurrency);
    assert_eq!(total.group_name, "TOTAL MONEDA MONEDA NACIONAL");
    assert_eq!(total.current_balance, dec!(350));
}

#[test]
fn currency_fold_rejects_unexpected_item_types() {
    let not_a_side_total = worked_scenario();
    assert!(total_by_currency(&not_a_side_total).is_err());
}

#[test]
fn report_total_sums_currency_totals() {
    let side_totals = total_by_side(&worked_scenario());
    let currency_totals = total_by_currency(&side_totals).unwrap();
    let report = total_report(&currency_totals).unwrap();

    assert_eq!(report.item_type, ItemType::BalanceTotalConsolidated);
    assert_eq!(report.group_name, "TOTAL DEL REPORTE");
    assert_eq!(report.current_balance, dec!(350));
}

#[test]
fn every_level_is_empty_for_empty_input() {
    let entries: Vec<BalanceEntry> = Vec::new();

    assert!(total_by_group(&entries).is_empty());
    let side_totals = total_by_side(&entries);
    assert!(side_totals.is_empty());
    let currency_totals = total_by_currency(&side_totals).unwrap();
    assert!(currency_totals.is_empty());
    assert!(total_report(&currency_totals).is_none());
}

#[test]
fn multi_currency_entries_keep_separate_totals() {
    let mut entries = worked_scenario();
    entries.push(entry("02", "1001", "00", DebtorCreditor::Deudora, dec!(80)));

    let side_totals = total_by_side(&entries);
    assert_eq!(side_totals.len(), 3);

    let currency_totals = total_by_currency(&side_totals).unwrap();
    assert_eq!(currency_totals.len(), 2);

    let report = total_report(&currency_totals).unwrap();
    assert_eq!(report.current_balance, dec!(430));
}

#[test]
fn average_balance_uses_day_weighted_movement() {
    let mut debtor = entry("01", "1001", "00", DebtorCreditor::Deudora, dec!(400));
    debtor.item_type = ItemType::BalanceTotalGroupDebtor;
    debtor.initial_balance = dec!(100);
    debtor.debit = dec!(310);
    debtor.credit = Decimal::ZERO;
    debtor.last_change_date = NaiveDate::from_ymd_opt(2024, 5, 22).unwrap();

    let mut rows = vec![debtor];
    let period_end = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
    apply_average_balances(&mut rows, period_end);

    // days = (31 - 22) + 1 = 10; (10 * 310) / 31 + 100 = 200
    assert_eq!(rows[0].average_balance, Some(dec!(200)));
}

#[test]
fn average_balance_flips_movement_for_creditor_groups() {
    let mut creditor = entry("01", "2001", "00", DebtorCreditor::Acreedora, dec!(400));
    creditor.item_type = ItemType::BalanceTotalGroupCreditor;
    creditor.initial_balance = dec!(50);
    creditor.debit = dec!(10);
    creditor.credit = dec!(320);
    creditor.last_change_date = NaiveDate::from_ymd_opt(2024, 5, 22).unwrap();

    let mut rows = vec![creditor];
    let period_end = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
    apply_average_balances(&mut rows, period_end);

    // net = 320 - 10 = 310; same day count as the debtor case
    assert_eq!(rows[0].average_balance, Some(dec!(200)));
}

#[test]
fn average_balance_leaves_detail_rows_untouched() {
    let mut rows = worked_scenario();
    apply_average_balances(&mut rows, NaiveDate::from_ymd_opt(2024, 5, 31).unwrap());
    assert!(rows.iter().all(|r| r.average_balance.is_none()));
}

#[test]
fn summarize_to_parents_folds_children_and_drops_them() {
    let mut parent = entry("01", "1100", "00", DebtorCreditor::Deudora, dec!(100));
    parent.is_parent_posting_entry = true;
    let mut child = entry("01", "110010", "00", DebtorCreditor::Deudora, dec!(40));
    child.has_parent_posting_entry = true;

    let result = summarize_to_parents(vec![parent, child], false);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].item_type, ItemType::Summary);
    assert_eq!(result[0].current_balance, dec!(140));
}

#[test]
fn summarize_to_parents_keeps_children_when_requested() {
    let mut parent = entry("01", "1100", "00", DebtorCreditor::Deudora, dec!(100));
    parent.is_parent_posting_entry = true;
    let mut child = entry("01", "110010", "00", DebtorCreditor::Deudora, dec!(40));
    child.has_parent_posting_entry = true;

    let result = summarize_to_parents(vec![parent, child], true);

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].current_balance, dec!(140));
    assert!(result[1].has_parent_posting_entry);
}

#[test]
fn summarize_to_parents_is_noop_without_parent_flags() {
    let entries = worked_scenario();
    let result = summarize_to_parents(entries.clone(), false);
    assert_eq!(result, entries);
}
