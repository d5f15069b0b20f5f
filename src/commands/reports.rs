// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::arg_str;
use crate::aggregate::Share;
use crate::config::Config;
use crate::tracker::Tracker;
use crate::utils::{fmt_money, fmt_percent, fmt_timestamp, maybe_print_json, pretty_table};
use anyhow::Result;
use std::fmt::Display;

/// Dashboard cards.
pub fn summary(tracker: &Tracker, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let s = tracker.summary()?;
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let ccy = &cfg.currency;
        let data = vec![
            vec!["Income".to_string(), fmt_money(&s.income, ccy)],
            vec!["Expenses".to_string(), fmt_money(&s.expense, ccy)],
            vec!["Balance".to_string(), fmt_money(&s.balance, ccy)],
            vec!["Loans Net".to_string(), fmt_money(&s.loan_net, ccy)],
        ];
        println!("{}", pretty_table(&["Dashboard", "Amount"], data));
    }
    Ok(())
}

pub fn handle(tracker: &Tracker, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let report = tracker.generate_report(&arg_str(sub, "period"))?;
    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }
    let ccy = &cfg.currency;
    println!(
        "{} Summary ({} to {})",
        report.period,
        fmt_timestamp(&report.range.start),
        fmt_timestamp(&report.range.end)
    );
    println!(
        "{}",
        pretty_table(
            &["Income", "Expenses", "Balance"],
            vec![vec![
                fmt_money(&report.total_income, ccy),
                fmt_money(&report.total_expense, ccy),
                fmt_money(&report.balance, ccy),
            ]],
        )
    );
    if !report.expense_by_category.is_empty() {
        println!("Expense by Category");
        println!(
            "{}",
            pretty_table(
                &["Category", "Spent", "Share"],
                share_rows(&report.expense_by_category, ccy)
            )
        );
    }
    if !report.income_by_source.is_empty() {
        println!("Income by Source");
        println!(
            "{}",
            pretty_table(
                &["Source", "Received", "Share"],
                share_rows(&report.income_by_source, ccy)
            )
        );
    }
    Ok(())
}

fn share_rows<K: Display>(shares: &[Share<K>], ccy: &str) -> Vec<Vec<String>> {
    shares
        .iter()
        .map(|s| {
            vec![
                s.key.to_string(),
                fmt_money(&s.total, ccy),
                fmt_percent(&s.percentage),
            ]
        })
        .collect()
}
