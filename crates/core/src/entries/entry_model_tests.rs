use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::entries::{BalanceEntry, DebtorCreditor, ItemType};

fn entry(account: &str, current: Decimal) -> BalanceEntry {
    BalanceEntry {
        item_type: ItemType::Entry,
        ledger_number: "001".to_string(),
        currency_code: "01".to_string(),
        account_number: account.to_string(),
        sector_code: "00".to_string(),
        debtor_creditor: DebtorCreditor::Deudora,
        group_number: String::new(),
        group_name: String::new(),
        initial_balance: dec!(100),
        debit: dec!(40),
        credit: dec!(10),
        current_balance: current,
        average_balance: None,
        exchange_rate: Decimal::ZERO,
        second_exchange_rate: Decimal::ZERO,
        has_parent_posting_entry: false,
        is_parent_posting_entry: false,
        last_change_date: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
    }
}

#[test]
fn accumulate_adds_numerics_and_advances_last_change_date() {
    let mut summary = entry("1001", dec!(130));
    let mut other = entry("1001", dec!(70));
    other.last_change_date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();

    summary.accumulate(&other);

    assert_eq!(summary.initial_balance, dec!(200));
    assert_eq!(summary.debit, dec!(80));
    assert_eq!(summary.credit, dec!(20));
    assert_eq!(summary.current_balance, dec!(200));
    assert_eq!(
        summary.last_change_date,
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    );
}

#[test]
fn accumulate_keeps_later_date_when_other_is_older() {
    let mut summary = entry("1001", dec!(130));
    let mut older = entry("1001", dec!(70));
    older.last_change_date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

    summary.accumulate(&older);

    assert_eq!(
        summary.last_change_date,
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    );
}

#[test]
fn summary_from_copies_grouping_fields_and_zeroes_numerics() {
    let source = entry("1001", dec!(300));
    let summary = BalanceEntry::summary_from(
        &source,
        ItemType::BalanceTotalGroupDebtor,
        "1001",
        "SUMA DE DELEGACIONES",
    );

    assert_eq!(summary.item_type, ItemType::BalanceTotalGroupDebtor);
    assert_eq!(summary.currency_code, "01");
    assert_eq!(summary.sector_code, "00");
    assert_eq!(summary.debtor_creditor, DebtorCreditor::Deudora);
    assert_eq!(summary.group_number, "1001");
    assert_eq!(summary.group_name, "SUMA DE DELEGACIONES");
    assert_eq!(summary.initial_balance, Decimal::ZERO);
    assert_eq!(summary.debit, Decimal::ZERO);
    assert_eq!(summary.credit, Decimal::ZERO);
    assert_eq!(summary.current_balance, Decimal::ZERO);
}

#[test]
fn negated_balances_flips_balances_but_not_movements() {
    let source = entry("2001", dec!(150));
    let negated = source.negated_balances();

    assert_eq!(negated.initial_balance, dec!(-100));
    assert_eq!(negated.current_balance, dec!(-150));
    assert_eq!(negated.debit, dec!(40));
    assert_eq!(negated.credit, dec!(10));
}

#[test]
fn item_type_classification() {
    assert!(ItemType::Entry.is_detail());
    assert!(ItemType::Summary.is_detail());
    assert!(!ItemType::BalanceTotalCurrency.is_detail());
    assert!(ItemType::BalanceTotalConsolidated.is_total());
    assert!(!ItemType::Entry.is_total());
}

#[test]
fn debtor_sorts_before_creditor_on_descending_ordinal() {
    assert!(DebtorCreditor::Deudora.ordinal() > DebtorCreditor::Acreedora.ordinal());
}
