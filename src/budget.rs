// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::aggregate::{checked, group_and_total, in_range};
use crate::error::{LedgerError, Result};
use crate::forms::ensure_storable;
use crate::models::{Category, Dataset, Expense};
use crate::period::DateRange;

const WARNING_THRESHOLD: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Unset,
    Ok,
    Warning,
    Over,
}

impl BudgetStatus {
    /// `percentage` is spend as a share of `budget`, in percent.
    pub fn classify(budget: Decimal, percentage: Decimal) -> Self {
        if budget.is_zero() {
            BudgetStatus::Unset
        } else if percentage > Decimal::ONE_HUNDRED {
            BudgetStatus::Over
        } else if percentage > WARNING_THRESHOLD {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Ok
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetStatus::Unset => "No budget set",
            BudgetStatus::Ok => "On track",
            BudgetStatus::Warning => "Warning",
            BudgetStatus::Over => "Over budget",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetLine {
    pub category: Category,
    pub budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub percentage: Decimal,
    pub status: BudgetStatus,
}

impl BudgetLine {
    pub fn new(category: Category, budget: Decimal, spent: Decimal) -> Result<Self> {
        let percentage = if budget > Decimal::ZERO {
            checked(
                spent
                    .checked_div(budget)
                    .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED)),
                "a budget percentage",
            )?
        } else {
            Decimal::ZERO
        };
        Ok(BudgetLine {
            category,
            budget,
            spent,
            remaining: checked(budget.checked_sub(spent), "a budget remainder")?,
            percentage,
            status: BudgetStatus::classify(budget, percentage),
        })
    }
}

/// One line per fixed category, month-to-date as of `now`.
pub fn evaluate(ds: &Dataset, now: NaiveDateTime) -> Result<Vec<BudgetLine>> {
    let range = DateRange::month_to_date(now);
    let spending = group_and_total(in_range(&ds.expenses, &range), |e: &Expense| {
        e.category.clone()
    })?;
    Category::ALL
        .iter()
        .map(|cat| {
            let spent = spending
                .iter()
                .find(|(c, _)| c == cat)
                .map(|(_, total)| *total)
                .unwrap_or(Decimal::ZERO);
            BudgetLine::new(cat.clone(), ds.budget_for(cat), spent)
        })
        .collect()
}

/// Upsert; re-setting a category overwrites it.
pub fn set_budget(ds: &mut Dataset, category: Category, amount: Decimal) -> Result<()> {
    if let Category::Unknown(raw) = &category {
        return Err(LedgerError::validation(format!("Unknown category '{}'", raw)));
    }
    if amount < Decimal::ZERO {
        return Err(LedgerError::validation("Budget amount cannot be negative"));
    }
    ensure_storable(amount)?;
    info!(category = %category, amount = %amount, "Budget set");
    ds.budgets.insert(category, amount);
    Ok(())
}
