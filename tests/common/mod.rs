// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use std::path::Path;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use walletwise::config::Config;
use walletwise::forms::{ExpenseForm, IncomeForm, LoanForm};
use walletwise::{Clock, Tracker};

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

pub fn tracker_at(dir: &Path, now: &str) -> Tracker {
    Tracker::open(&Config::new(dir))
        .unwrap()
        .with_clock(Clock::Fixed(ts(now)))
}

pub fn expense(amount: &str, description: &str, category: &str) -> ExpenseForm {
    ExpenseForm {
        amount: amount.into(),
        description: description.into(),
        category: category.into(),
        payment_method: "Card".into(),
        recurring: "No".into(),
    }
}

pub fn income(amount: &str, description: &str, source: &str) -> IncomeForm {
    IncomeForm {
        amount: amount.into(),
        description: description.into(),
        source: source.into(),
        recurring: "Monthly".into(),
    }
}

pub fn loan(amount: &str, person: &str, r#type: &str) -> LoanForm {
    LoanForm {
        amount: amount.into(),
        person: person.into(),
        description: format!("{} loan", r#type),
        r#type: r#type.into(),
        due_date: "2024-12-31".into(),
    }
}

/// Adds an expense stamped at `when`.
pub fn add_expense_at(t: &mut Tracker, when: &str, amount: &str, category: &str) {
    t.set_clock(Clock::Fixed(ts(when)));
    t.add_expense(&expense(amount, "", category)).unwrap();
}
