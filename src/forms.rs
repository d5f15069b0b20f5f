// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Raw user input for the add operations, and its validation into records.
//! Validation never touches the dataset; a rejected form writes nothing.

use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::{LedgerError, Result};
use crate::models::{
    Category, Expense, ExpenseRecurrence, Income, IncomeRecurrence, IncomeSource, Loan,
    LoanStatus, LoanType, PaymentMethod,
};

/// Prompt texts a picker shows before anything is chosen.
const PLACEHOLDERS: &[&str] = &[
    "Select Category",
    "Payment Method",
    "Income Source",
    "Loan Type",
    "All Categories",
];

/// Largest amount accepted on input (one trillion).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Amounts are money: at most two decimal places.
pub const MAX_DECIMAL_PLACES: u32 = 2;

/// Amounts are stored as JSON numbers, which only hold about 15 significant digits
/// exactly. Within these bounds an amount reads back unchanged, and sums of them stay
/// far inside `Decimal` range.
pub fn ensure_storable(amount: Decimal) -> Result<()> {
    if amount.abs() > MAX_AMOUNT {
        return Err(LedgerError::validation(
            "Amount is too large (limit 1,000,000,000,000)",
        ));
    }
    if amount.normalize().scale() > MAX_DECIMAL_PLACES {
        return Err(LedgerError::validation(format!(
            "Amount can have at most {} decimal places",
            MAX_DECIMAL_PLACES
        )));
    }
    Ok(())
}

fn parse_number(raw: &str) -> Result<Decimal> {
    let s = raw.trim();
    let amount = Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| LedgerError::validation(format!("Please enter a valid amount! ('{}')", s)))?;
    ensure_storable(amount)?;
    Ok(amount.normalize())
}

pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let amount = parse_number(raw)?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::validation("Amount must be greater than zero"));
    }
    Ok(amount)
}

/// Budgets may be zero, which clears them back to "unset".
pub fn parse_budget_amount(raw: &str) -> Result<Decimal> {
    let amount = parse_number(raw)?;
    if amount < Decimal::ZERO {
        return Err(LedgerError::validation("Budget amount cannot be negative"));
    }
    Ok(amount)
}

fn is_placeholder(s: &str) -> bool {
    PLACEHOLDERS.iter().any(|p| p.eq_ignore_ascii_case(s))
}

/// Resolves a picker value. Empty or placeholder input is "nothing selected".
pub fn parse_choice<T>(raw: &str, field: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
    let s = raw.trim();
    if s.is_empty() || is_placeholder(s) {
        return Err(LedgerError::validation(format!("Please select {}!", field)));
    }
    parse(s).ok_or_else(|| LedgerError::validation(format!("Unknown {} '{}'", field, s)))
}

/// An optional filter picker: empty, "All" and placeholders mean no filter.
pub fn parse_category_filter(raw: &str) -> Result<Option<Category>> {
    let s = raw.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("all") || is_placeholder(s) {
        return Ok(None);
    }
    parse_choice(s, "a category", Category::parse_known).map(Some)
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub amount: String,
    pub description: String,
    pub category: String,
    pub payment_method: String,
    pub recurring: String,
}

impl ExpenseForm {
    /// Id is left at 0; the store assigns it on append.
    pub fn validate(&self, now: NaiveDateTime) -> Result<Expense> {
        let amount = parse_amount(&self.amount)?;
        let category = parse_choice(&self.category, "a category", Category::parse_known)?;
        let payment_method =
            parse_choice(&self.payment_method, "a payment method", PaymentMethod::parse_known)?;
        let recurring = if self.recurring.trim().is_empty() {
            ExpenseRecurrence::No
        } else {
            parse_choice(&self.recurring, "a recurrence", ExpenseRecurrence::parse_known)?
        };
        Ok(Expense {
            amount,
            description: self.description.trim().to_string(),
            category,
            payment_method,
            recurring,
            date: now,
            id: 0,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct IncomeForm {
    pub amount: String,
    pub description: String,
    pub source: String,
    pub recurring: String,
}

impl IncomeForm {
    pub fn validate(&self, now: NaiveDateTime) -> Result<Income> {
        let amount = parse_amount(&self.amount)?;
        let source = parse_choice(&self.source, "income source", IncomeSource::parse_known)?;
        let recurring = if self.recurring.trim().is_empty() {
            IncomeRecurrence::No
        } else {
            parse_choice(&self.recurring, "a recurrence", IncomeRecurrence::parse_known)?
        };
        Ok(Income {
            amount,
            description: self.description.trim().to_string(),
            source,
            recurring,
            date: now,
            id: 0,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoanForm {
    pub amount: String,
    pub person: String,
    pub description: String,
    pub r#type: String,
    /// Free text, conventionally YYYY-MM-DD.
    pub due_date: String,
}

impl LoanForm {
    pub fn validate(&self, now: NaiveDateTime) -> Result<Loan> {
        let amount = parse_amount(&self.amount)?;
        let r#type = parse_choice(&self.r#type, "loan type", LoanType::parse_known)?;
        Ok(Loan {
            amount,
            person: self.person.trim().to_string(),
            description: self.description.trim().to_string(),
            r#type,
            due_date: self.due_date.trim().to_string(),
            date: now,
            status: LoanStatus::Active,
            id: 0,
            settled_date: None,
        })
    }
}
