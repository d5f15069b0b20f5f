// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::arg_str;
use crate::budget::BudgetStatus;
use crate::config::Config;
use crate::tracker::Tracker;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(tracker: &Tracker, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(tracker, cfg, sub)?,
        Some(("list", sub)) => list(tracker, cfg, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(tracker: &Tracker, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let cat = arg_str(sub, "category");
    let amount = arg_str(sub, "amount");
    let stored = tracker.set_budget(&cat, &amount)?;
    println!(
        "Budget set for {} = {}",
        cat.trim(),
        fmt_money(&stored, &cfg.currency)
    );
    Ok(())
}

fn list(tracker: &Tracker, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let lines = tracker.budgets()?;
    if maybe_print_json(json_flag, jsonl_flag, &lines)? {
        return Ok(());
    }
    let ccy = &cfg.currency;
    let data: Vec<Vec<String>> = lines
        .iter()
        .map(|l| {
            if l.status == BudgetStatus::Unset {
                vec![
                    l.category.to_string(),
                    String::new(),
                    fmt_money(&l.spent, ccy),
                    String::new(),
                    String::new(),
                    l.status.label().to_string(),
                ]
            } else {
                vec![
                    l.category.to_string(),
                    fmt_money(&l.budget, ccy),
                    fmt_money(&l.spent, ccy),
                    fmt_money(&l.remaining, ccy),
                    fmt_percent(&l.percentage),
                    l.status.label().to_string(),
                ]
            }
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Category", "Budget", "Spent", "Remaining", "Used", "Status"],
            data
        )
    );
    Ok(())
}
