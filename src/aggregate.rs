// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{LedgerError, Result};
use crate::loans;
use crate::models::{Category, Dataset, Expense, Income, IncomeSource, Record};
use crate::period::{DateRange, Period};

/// Records whose timestamp falls in `range` and which satisfy `predicate`, in
/// collection order.
pub fn filter<'a, R, P>(records: &'a [R], range: &DateRange, predicate: P) -> Vec<&'a R>
where
    R: Record,
    P: Fn(&R) -> bool,
{
    records
        .iter()
        .filter(|r| range.contains(r.timestamp()) && predicate(*r))
        .collect()
}

pub fn in_range<'a, R: Record>(records: &'a [R], range: &DateRange) -> Vec<&'a R> {
    filter(records, range, |_| true)
}

/// Turns a `checked_*` result into an `Overflow` error naming `what`.
pub(crate) fn checked(value: Option<Decimal>, what: &'static str) -> Result<Decimal> {
    value.ok_or(LedgerError::Overflow(what))
}

pub fn sum_amount<'a, R, I>(records: I) -> Result<Decimal>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, r| checked(acc.checked_add(r.amount()), "a total"))
}

/// Per-key totals in first-seen key order.
pub fn group_and_total<'a, R, I, K, F>(records: I, key_fn: F) -> Result<Vec<(K, Decimal)>>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
    K: PartialEq,
    F: Fn(&R) -> K,
{
    let mut groups: Vec<(K, Decimal)> = Vec::new();
    for r in records {
        let key = key_fn(r);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => {
                *total = checked(total.checked_add(r.amount()), "a group total")?;
            }
            None => groups.push((key, r.amount())),
        }
    }
    Ok(groups)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share<K> {
    pub key: K,
    pub total: Decimal,
    pub percentage: Decimal,
}

/// Largest total first; equal totals keep grouping order.
pub fn with_percentages<K>(
    groups: Vec<(K, Decimal)>,
    grand_total: Decimal,
) -> Result<Vec<Share<K>>> {
    let mut shares = groups
        .into_iter()
        .map(|(key, total)| -> Result<Share<K>> {
            let percentage = if grand_total.is_zero() {
                Decimal::ZERO
            } else {
                checked(
                    total
                        .checked_div(grand_total)
                        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED)),
                    "a percentage",
                )?
            };
            Ok(Share {
                key,
                total,
                percentage,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    shares.sort_by(|a, b| b.total.cmp(&a.total));
    Ok(shares)
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    Expenses,
    Income,
}

impl SearchScope {
    fn includes_expenses(self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Expenses)
    }

    fn includes_income(self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Income)
    }
}

impl FromStr for SearchScope {
    type Err = LedgerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(SearchScope::All),
            "expenses" | "expense" => Ok(SearchScope::Expenses),
            "income" => Ok(SearchScope::Income),
            other => Err(LedgerError::validation(format!(
                "Unknown search type '{}', expected All, Expenses or Income",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SearchHit {
    Expense(Expense),
    Income(Income),
}

impl SearchHit {
    pub fn label(&self) -> &'static str {
        match self {
            SearchHit::Expense(_) => "Expense",
            SearchHit::Income(_) => "Income",
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            SearchHit::Expense(e) => e.amount,
            SearchHit::Income(i) => i.amount,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            SearchHit::Expense(e) => &e.description,
            SearchHit::Income(i) => &i.description,
        }
    }

    pub fn date(&self) -> NaiveDateTime {
        match self {
            SearchHit::Expense(e) => e.date,
            SearchHit::Income(i) => i.date,
        }
    }

    /// Expense category or income source.
    pub fn tag(&self) -> &str {
        match self {
            SearchHit::Expense(e) => e.category.as_str(),
            SearchHit::Income(i) => i.source.as_str(),
        }
    }
}

/// Expenses first, then income. The category filter never applies to income.
pub fn search(
    ds: &Dataset,
    term: &str,
    scope: SearchScope,
    category: Option<&Category>,
) -> Vec<SearchHit> {
    let mut hits = Vec::new();
    if scope.includes_expenses() {
        hits.extend(
            ds.expenses
                .iter()
                .filter(|e| contains_ignore_case(&e.description, term))
                .filter(|e| category.is_none_or(|c| &e.category == c))
                .cloned()
                .map(SearchHit::Expense),
        );
    }
    if scope.includes_income() {
        hits.extend(
            ds.income
                .iter()
                .filter(|i| contains_ignore_case(&i.description, term))
                .cloned()
                .map(SearchHit::Income),
        );
    }
    hits
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub period: Period,
    pub range: DateRange,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub expense_by_category: Vec<Share<Category>>,
    pub income_by_source: Vec<Share<IncomeSource>>,
}

pub fn report(ds: &Dataset, period: Period, now: NaiveDateTime) -> Result<Report> {
    let range = period.resolve(now);
    let expenses = in_range(&ds.expenses, &range);
    let income = in_range(&ds.income, &range);

    let total_expense = sum_amount(expenses.iter().copied())?;
    let total_income = sum_amount(income.iter().copied())?;

    let by_category =
        group_and_total(expenses.iter().copied(), |e: &Expense| e.category.clone())?;
    let by_source = group_and_total(income.iter().copied(), |i: &Income| i.source.clone())?;

    Ok(Report {
        period,
        range,
        total_income,
        total_expense,
        balance: checked(total_income.checked_sub(total_expense), "the balance")?,
        expense_by_category: with_percentages(by_category, total_expense)?,
        income_by_source: with_percentages(by_source, total_income)?,
    })
}

/// Dashboard figures over the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub loan_net: Decimal,
}

pub fn summarize(ds: &Dataset) -> Result<Summary> {
    let income = sum_amount(&ds.income)?;
    let expense = sum_amount(&ds.expenses)?;
    Ok(Summary {
        income,
        expense,
        balance: checked(income.checked_sub(expense), "the balance")?,
        loan_net: loans::net_exposure(ds)?,
    })
}
