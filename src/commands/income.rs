// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::arg_str;
use crate::aggregate::filter;
use crate::config::Config;
use crate::forms::{IncomeForm, parse_choice};
use crate::models::{Income, IncomeSource};
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
    let form = IncomeForm {
        amount: arg_str(sub, "amount"),
        description: arg_str(sub, "description"),
        source: arg_str(sub, "source"),
        recurring: arg_str(sub, "recurring"),
    };
    let i = tracker.add_income(&form)?;
    println!(
        "Income added successfully! #{} {} from {}",
        i.id,
        fmt_money(&i.amount, &cfg.currency),
        i.source
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
            .map(|i| {
                vec![
                    i.id.to_string(),
                    fmt_date(&i.date),
                    i.description.clone(),
                    i.source.to_string(),
                    i.recurring.to_string(),
                    fmt_money(&i.amount, &cfg.currency),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Description", "Source", "Recurring", "Amount"],
                rows
            )
        );
    }
    Ok(())
}

pub fn query_rows(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<Vec<Income>> {
    let ds = tracker.snapshot()?;
    let source = match sub.get_one::<String>("source") {
        Some(s) => Some(parse_choice(s, "income source", IncomeSource::parse_known)?),
        None => None,
    };
    let period = match sub.get_one::<String>("period") {
        Some(p) => p.parse::<Period>()?,
        None => Period::AllTime,
    };
    let range = period.resolve(tracker.now());
    let mut data: Vec<Income> = filter(&ds.income, &range, |i: &Income| {
        source.as_ref().is_none_or(|s| &i.source == s)
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
