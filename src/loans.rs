// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::info;

use crate::aggregate::{checked, sum_amount};
use crate::error::{LedgerError, Result};
use crate::models::{Dataset, Loan, LoanStatus, LoanType};

/// Appends `loan` as active with the next sequential id.
pub fn add(ds: &mut Dataset, mut loan: Loan) -> Loan {
    loan.status = LoanStatus::Active;
    loan.settled_date = None;
    ds.push(loan)
}

/// One-way transition. A second settle is rejected and leaves the first
/// `settled_date` untouched.
pub fn settle_record(loan: &mut Loan, now: NaiveDateTime) -> Result<()> {
    if loan.status == LoanStatus::Settled {
        return Err(LedgerError::AlreadySettled(loan.id));
    }
    loan.status = LoanStatus::Settled;
    loan.settled_date = Some(now);
    info!(id = loan.id, person = %loan.person, "Loan settled");
    Ok(())
}

pub fn settle(ds: &mut Dataset, id: u64, now: NaiveDateTime) -> Result<Loan> {
    let loan = ds.find_mut::<Loan>(id)?;
    settle_record(loan, now)?;
    Ok(loan.clone())
}

pub fn list<'a>(ds: &'a Dataset, r#type: &LoanType, status: &LoanStatus) -> Vec<&'a Loan> {
    ds.loans
        .iter()
        .filter(|l| &l.r#type == r#type && &l.status == status)
        .collect()
}

pub fn active<'a>(ds: &'a Dataset, r#type: &LoanType) -> Vec<&'a Loan> {
    list(ds, r#type, &LoanStatus::Active)
}

/// Given minus taken, active loans only.
pub fn net_exposure(ds: &Dataset) -> Result<Decimal> {
    let given = sum_amount(active(ds, &LoanType::Given))?;
    let taken = sum_amount(active(ds, &LoanType::Taken))?;
    checked(given.checked_sub(taken), "the loan net")
}
