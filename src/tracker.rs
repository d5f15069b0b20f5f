// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The operations a front end drives: every call loads the document, works on it,
//! and (for mutations) writes it back before returning.

use chrono::{Local, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use tracing::debug;

use crate::aggregate::{self, Report, SearchHit, SearchScope, Summary};
use crate::auth::Authenticator;
use crate::budget::{self, BudgetLine};
use crate::config::Config;
use crate::error::Result;
use crate::forms::{
    ExpenseForm, IncomeForm, LoanForm, parse_budget_amount, parse_category_filter, parse_choice,
};
use crate::loans;
use crate::models::{Category, Dataset, Expense, Income, Loan, LoanStatus, LoanType};
use crate::period::Period;
use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(NaiveDateTime),
}

impl Clock {
    /// Local wall time, truncated to whole seconds like the stored timestamps.
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System => {
                let now = Local::now().naive_local();
                now.with_nanosecond(0).unwrap_or(now)
            }
            Clock::Fixed(t) => *t,
        }
    }
}

#[derive(Debug)]
pub struct Tracker {
    store: RecordStore,
    auth: Authenticator,
    clock: Clock,
}

impl Tracker {
    pub fn new(store: RecordStore, auth: Authenticator) -> Self {
        Tracker {
            store,
            auth,
            clock: Clock::System,
        }
    }

    pub fn open(config: &Config) -> Result<Self> {
        let store = RecordStore::open(config.data_file());
        let auth = Authenticator::open(config.auth_file())?;
        debug!(data = %store.path().display(), "Tracker opened");
        Ok(Tracker::new(store, auth))
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn snapshot(&self) -> Result<Dataset> {
        self.store.load()
    }

    pub fn has_password(&self) -> bool {
        self.auth.is_configured()
    }

    pub fn authenticate(&self, password: &str) -> bool {
        self.auth.verify(password)
    }

    pub fn set_password(&mut self, password: &str) -> Result<()> {
        self.auth.set_password(password)
    }

    pub fn summary(&self) -> Result<Summary> {
        aggregate::summarize(&self.store.load()?)
    }

    pub fn add_expense(&self, form: &ExpenseForm) -> Result<Expense> {
        let expense = form.validate(self.now())?;
        self.store.append(expense)
    }

    pub fn add_income(&self, form: &IncomeForm) -> Result<Income> {
        let income = form.validate(self.now())?;
        self.store.append(income)
    }

    pub fn add_loan(&self, form: &LoanForm) -> Result<Loan> {
        let loan = form.validate(self.now())?;
        self.store.modify(|ds| Ok(loans::add(ds, loan)))
    }

    pub fn settle_loan(&self, id: u64) -> Result<Loan> {
        let now = self.now();
        self.store
            .update_by_id::<Loan, _>(id, |loan| loans::settle_record(loan, now))
    }

    /// Active loans in one direction.
    pub fn list_loans(&self, r#type: &str) -> Result<Vec<Loan>> {
        self.list_loans_by_status(r#type, &LoanStatus::Active)
    }

    pub fn list_loans_by_status(&self, r#type: &str, status: &LoanStatus) -> Result<Vec<Loan>> {
        let r#type = parse_choice(r#type, "loan type", LoanType::parse_known)?;
        let ds = self.store.load()?;
        Ok(loans::list(&ds, &r#type, status)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn search(
        &self,
        term: &str,
        type_filter: &str,
        category_filter: &str,
    ) -> Result<Vec<SearchHit>> {
        let scope: SearchScope = type_filter.parse()?;
        let category = parse_category_filter(category_filter)?;
        let ds = self.store.load()?;
        Ok(aggregate::search(&ds, term, scope, category.as_ref()))
    }

    pub fn generate_report(&self, period: &str) -> Result<Report> {
        let period: Period = period.parse()?;
        aggregate::report(&self.store.load()?, period, self.now())
    }

    pub fn budgets(&self) -> Result<Vec<BudgetLine>> {
        budget::evaluate(&self.store.load()?, self.now())
    }

    /// Returns the amount as stored.
    pub fn set_budget(&self, category: &str, amount: &str) -> Result<Decimal> {
        let category = parse_choice(category, "a category", Category::parse_known)?;
        let amount = parse_budget_amount(amount)?;
        self.store
            .modify(|ds| budget::set_budget(ds, category, amount))?;
        Ok(amount)
    }
}
