// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{add_expense_at, dec, expense, income, tracker_at, ts};
use rust_decimal::Decimal;
use tempfile::tempdir;
use walletwise::aggregate::{
    SearchHit, SearchScope, filter, group_and_total, in_range, report, search, sum_amount,
    summarize, with_percentages,
};
use walletwise::models::{
    Category, Dataset, Expense, ExpenseRecurrence, IncomeSource, PaymentMethod,
};
use walletwise::store::RecordStore;
use walletwise::period::Period;
use walletwise::{Clock, LedgerError};

#[test]
fn grouping_keeps_first_seen_order_and_ties() {
    let dir = tempdir().unwrap();
    let mut t = tracker_at(dir.path(), "2024-03-01 09:00:00");
    add_expense_at(&mut t, "2024-03-01 09:00:00", "30", "Transport");
    add_expense_at(&mut t, "2024-03-02 09:00:00", "50", "Food");
    add_expense_at(&mut t, "2024-03-03 09:00:00", "20", "Transport");
    add_expense_at(&mut t, "2024-03-04 09:00:00", "10", "Bills");
    let ds = t.snapshot().unwrap();

    let groups = group_and_total(&ds.expenses, |e: &Expense| e.category.clone()).unwrap();
    assert_eq!(
        groups,
        vec![
            (Category::Transport, dec("50")),
            (Category::Food, dec("50")),
            (Category::Bills, dec("10")),
        ]
    );

    let shares = with_percentages(groups, sum_amount(&ds.expenses).unwrap()).unwrap();
    // Transport and Food tie; Transport was seen first.
    let keys: Vec<_> = shares.iter().map(|s| s.key.clone()).collect();
    assert_eq!(keys, vec![Category::Transport, Category::Food, Category::Bills]);
    assert_eq!(shares[0].total, dec("50"));
    assert_eq!(shares[0].percentage.round_dp(2), dec("45.45"));
    assert_eq!(shares[2].percentage.round_dp(2), dec("9.09"));
    let total: Decimal = shares.iter().map(|s| s.percentage).sum();
    assert!((total - Decimal::ONE_HUNDRED).abs() < dec("0.0001"));
}

#[test]
fn percentages_are_zero_without_a_total() {
    let shares = with_percentages(
        vec![("a", Decimal::ZERO), ("b", Decimal::ZERO)],
        Decimal::ZERO,
    )
    .unwrap();
    assert!(shares.iter().all(|s| s.percentage.is_zero()));
    assert!(
        with_percentages(Vec::<(&str, Decimal)>::new(), Decimal::ZERO)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn thirds_sum_to_about_one_hundred() {
    let shares = with_percentages(
        vec![("x", dec("1")), ("y", dec("1")), ("z", dec("1"))],
        dec("3"),
    )
    .unwrap();
    let total: Decimal = shares.iter().map(|s| s.percentage).sum();
    assert!((total - Decimal::ONE_HUNDRED).abs() < dec("0.0001"));
}

#[test]
fn filter_is_range_bounded_and_ordered() {
    let dir = tempdir().unwrap();
    let mut t = tracker_at(dir.path(), "2024-02-28 09:00:00");
    add_expense_at(&mut t, "2024-02-28 09:00:00", "5", "Food");
    add_expense_at(&mut t, "2024-03-01 00:00:00", "7", "Food");
    add_expense_at(&mut t, "2024-03-09 12:00:00", "9", "Health");
    add_expense_at(&mut t, "2024-03-10 12:00:00", "11", "Food");
    let ds = t.snapshot().unwrap();

    let range = Period::ThisMonth.resolve(ts("2024-03-10 12:00:00"));
    let ids: Vec<u64> = in_range(&ds.expenses, &range).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 3, 4]);

    let food = filter(&ds.expenses, &range, |e: &Expense| e.category == Category::Food);
    assert_eq!(food.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 4]);
    assert_eq!(sum_amount(food).unwrap(), dec("18"));
    assert_eq!(sum_amount(Vec::<&Expense>::new()).unwrap(), Decimal::ZERO);
}

fn search_fixture(t: &mut walletwise::Tracker) {
    t.add_expense(&expense("250", "Uber ride home", "Transport")).unwrap();
    t.add_expense(&expense("80", "Taxi snacks", "Food")).unwrap();
    t.add_expense(&expense("40", "", "Transport")).unwrap();
    t.add_income(&income("1500", "Transport allowance", "Salary")).unwrap();
    t.add_income(&income("900", "Logo design", "Freelance")).unwrap();
}

#[test]
fn search_category_only_matches_exact_category() {
    let dir = tempdir().unwrap();
    let mut t = tracker_at(dir.path(), "2024-03-10 10:00:00");
    search_fixture(&mut t);

    let hits = t.search("", "Expenses", "Transport").unwrap();
    assert_eq!(hits.len(), 2);
    for h in &hits {
        match h {
            SearchHit::Expense(e) => assert_eq!(e.category, Category::Transport),
            SearchHit::Income(_) => panic!("income leaked into expense search"),
        }
    }
}

#[test]
fn search_is_case_insensitive_and_skips_category_for_income() {
    let dir = tempdir().unwrap();
    let mut t = tracker_at(dir.path(), "2024-03-10 10:00:00");
    search_fixture(&mut t);
    let ds = t.snapshot().unwrap();

    let hits = search(&ds, "UBER", SearchScope::All, None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].description(), "Uber ride home");

    // Category filter narrows expenses but every matching income still shows.
    let hits = search(&ds, "transport", SearchScope::All, Some(&Category::Food));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].label(), "Income");

    let hits = t.search("", "All", "All Categories").unwrap();
    let labels: Vec<_> = hits.iter().map(|h| h.label()).collect();
    assert_eq!(
        labels,
        vec!["Expense", "Expense", "Expense", "Income", "Income"]
    );

    let hits = t.search("design", "Income", "Food").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].tag(), "Freelance");

    assert!(matches!(
        t.search("", "Loans", ""),
        Err(LedgerError::Validation(_))
    ));
}

#[test]
fn report_for_last_month() {
    let dir = tempdir().unwrap();
    let mut t = tracker_at(dir.path(), "2024-02-05 10:00:00");
    t.add_income(&income("1000", "Feb pay", "Salary")).unwrap();
    add_expense_at(&mut t, "2024-02-10 10:00:00", "300", "Bills");
    add_expense_at(&mut t, "2024-02-20 10:00:00", "100", "Food");
    add_expense_at(&mut t, "2024-03-02 10:00:00", "999", "Shopping");
    t.set_clock(Clock::Fixed(ts("2024-03-15 10:00:00")));

    let r = t.generate_report("Last Month").unwrap();
    assert_eq!(r.period, Period::LastMonth);
    assert_eq!(r.total_income, dec("1000"));
    assert_eq!(r.total_expense, dec("400"));
    assert_eq!(r.balance, dec("600"));
    assert_eq!(r.expense_by_category.len(), 2);
    assert_eq!(r.expense_by_category[0].key, Category::Bills);
    assert_eq!(r.expense_by_category[0].percentage, dec("75"));
    assert_eq!(r.expense_by_category[1].percentage, dec("25"));
    assert_eq!(r.income_by_source[0].key, IncomeSource::Salary);
    assert_eq!(r.income_by_source[0].percentage, dec("100"));

    let r = t.generate_report("This Month").unwrap();
    assert_eq!(r.total_expense, dec("999"));
    assert!(r.total_income.is_zero());
    assert!(r.income_by_source.is_empty());
    assert_eq!(r.balance, dec("-999"));
}

#[test]
fn summary_uses_everything_and_active_loans() {
    let dir = tempdir().unwrap();
    let t = tracker_at(dir.path(), "2024-03-10 10:00:00");
    t.add_income(&income("2000", "Pay", "Salary")).unwrap();
    t.add_expense(&expense("350.50", "Groceries", "Food")).unwrap();
    t.add_loan(&common::loan("500", "Asha", "given")).unwrap();
    t.add_loan(&common::loan("200", "Bank", "taken")).unwrap();

    let s = t.summary().unwrap();
    assert_eq!(s.income, dec("2000"));
    assert_eq!(s.expense, dec("350.5"));
    assert_eq!(s.balance, dec("1649.5"));
    assert_eq!(s.loan_net, dec("300"));
}

fn stored_expense(id: u64, amount: &str) -> Expense {
    Expense {
        amount: dec(amount),
        description: String::new(),
        category: Category::Other,
        payment_method: PaymentMethod::Cash,
        recurring: ExpenseRecurrence::No,
        date: ts("2024-03-02 10:00:00"),
        id,
    }
}

#[test]
fn oversized_stored_totals_are_errors_not_panics() {
    let ds = Dataset {
        expenses: vec![
            stored_expense(1, "50000000000000000000000000000"),
            stored_expense(2, "50000000000000000000000000000"),
        ],
        ..Dataset::default()
    };
    assert!(matches!(summarize(&ds), Err(LedgerError::Overflow(_))));
    assert!(matches!(
        report(&ds, Period::ThisMonth, ts("2024-03-10 10:00:00")),
        Err(LedgerError::Overflow(_))
    ));
    assert!(matches!(
        group_and_total(&ds.expenses, |e: &Expense| e.category.clone()),
        Err(LedgerError::Overflow(_))
    ));

    // Same document on disk, as a hand-edited file would hold it.
    let dir = tempdir().unwrap();
    RecordStore::open(dir.path().join("main_data.json"))
        .save(&ds)
        .unwrap();
    let t = tracker_at(dir.path(), "2024-03-10 10:00:00");
    assert!(matches!(t.summary(), Err(LedgerError::Overflow(_))));
    assert!(matches!(
        t.generate_report("This Month"),
        Err(LedgerError::Overflow(_))
    ));
}
