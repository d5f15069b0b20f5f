// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::arg_str;
use crate::aggregate::filter;
use crate::config::Config;
use crate::forms::{ExpenseForm, parse_category_filter};
use crate::models::Expense;
use crate::period::Period;
use crate::tracker::Tracker;
use crate::utils::{fmt_date, fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(tracker: &Tracker, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(tracker, cfg, sub)?,
        Some(("list", sub)) => list(tracker, cfg, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(tracker: &Tracker, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let form = ExpenseForm {
        amount: arg_str(sub, "amount"),
        description: arg_str(sub, "description"),
        category: arg_str(sub, "category"),
        payment_method: arg_str(sub, "payment"),
        recurring: arg_str(sub, "recurring"),
    };
    let e = tracker.add_expense(&form)?;
    println!(
        "Expense added successfully! #{} {} ({}, {})",
        e.id,
        fmt_money(&e.amount, &cfg.currency),
        e.category,
        e.payment_method
    );
    Ok(())
}

fn list(tracker: &Tracker, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(tracker, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    fmt_date(&e.date),
                    e.description.clone(),
                    e.category.to_string(),
                    e.payment_method.to_string(),
                    e.recurring.to_string(),
                    fmt_money(&e.amount, &cfg.currency),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Description", "Category", "Payment", "Recurring", "Amount"],
                rows,
            )
        );
    }
    Ok(())
}

/// Newest first, optionally narrowed to a category and/or period.
pub fn query_rows(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<Vec<Expense>> {
    let ds = tracker.snapshot()?;
    let category = parse_category_filter(&arg_str(sub, "category"))?;
    let period = match sub.get_one::<String>("period") {
        Some(p) => p.parse::<Period>()?,
        None => Period::AllTime,
    };
    let range = period.resolve(tracker.now());
    let mut data: Vec<Expense> = filter(&ds.expenses, &range, |e: &Expense| {
        category.as_ref().is_none_or(|c| &e.category == c)
    })
    .into_iter()
    .rev()
    .cloned()
    .collect();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}
