// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::arg_str;
use crate::aggregate::sum_amount;
use crate::config::Config;
use crate::forms::{LoanForm, parse_choice};
use crate::models::LoanStatus;
use crate::tracker::Tracker;
use crate::utils::{fmt_date, fmt_money, maybe_print_json, pretty_table};
use anyhow::{Context, Result};

pub fn handle(tracker: &Tracker, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(tracker, cfg, sub)?,
        Some(("list", sub)) => list(tracker, cfg, sub)?,
        Some(("settle", sub)) => settle(tracker, cfg, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(tracker: &Tracker, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let form = LoanForm {
        amount: arg_str(sub, "amount"),
        person: arg_str(sub, "person"),
        description: arg_str(sub, "description"),
        r#type: arg_str(sub, "type"),
        due_date: arg_str(sub, "due"),
    };
    let loan = tracker.add_loan(&form)?;
    println!(
        "Loan #{} recorded: {} {} {}",
        loan.id,
        loan.r#type,
        fmt_money(&loan.amount, &cfg.currency),
        loan.person
    );
    Ok(())
}

fn list(tracker: &Tracker, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let r#type = arg_str(sub, "type");
    let status = parse_choice(&arg_str(sub, "status"), "loan status", LoanStatus::parse_known)?;
    let data = tracker.list_loans_by_status(&r#type, &status)?;
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No {} {} loans", status, r#type.trim());
        return Ok(());
    }
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|l| {
            vec![
                l.id.to_string(),
                l.person.clone(),
                fmt_money(&l.amount, &cfg.currency),
                l.description.clone(),
                if l.due_date.is_empty() {
                    "N/A".to_string()
                } else {
                    l.due_date.clone()
                },
                fmt_date(&l.date),
                l.settled_date.as_ref().map(fmt_date).unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Person", "Amount", "Description", "Due", "Date", "Settled"],
            rows
        )
    );
    println!("Total: {}", fmt_money(&sum_amount(&data)?, &cfg.currency));
    Ok(())
}

fn settle(tracker: &Tracker, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<u64>("id").context("--id is required")?;
    let loan = tracker.settle_loan(id)?;
    println!(
        "Settled loan #{} ({} {})",
        loan.id,
        loan.person,
        fmt_money(&loan.amount, &cfg.currency)
    );
    Ok(())
}
