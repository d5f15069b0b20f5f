// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::tracker::Tracker;
use crate::utils::fmt_timestamp;
use anyhow::{Context, Result, bail};

pub fn handle(tracker: &Tracker, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => export_expenses(tracker, sub),
        Some(("income", sub)) => export_income(tracker, sub),
        _ => Ok(()),
    }
}

fn format_and_out(sub: &clap::ArgMatches) -> Result<(String, &String)> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_else(|| "csv".to_string());
    let out = sub.get_one::<String>("out").context("--out is required")?;
    Ok((fmt, out))
}

fn export_expenses(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let (fmt, out) = format_and_out(sub)?;
    let ds = tracker.snapshot()?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Failed to create {}", out))?;
            wtr.write_record([
                "id",
                "date",
                "amount",
                "description",
                "category",
                "payment_method",
                "recurring",
            ])?;
            for e in &ds.expenses {
                wtr.write_record([
                    e.id.to_string(),
                    fmt_timestamp(&e.date),
                    e.amount.to_string(),
                    e.description.clone(),
                    e.category.to_string(),
                    e.payment_method.to_string(),
                    e.recurring.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&ds.expenses)?)
                .with_context(|| format!("Failed to write {}", out))?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} expenses to {}", ds.expenses.len(), out);
    Ok(())
}

fn export_income(tracker: &Tracker, sub: &clap::ArgMatches) -> Result<()> {
    let (fmt, out) = format_and_out(sub)?;
    let ds = tracker.snapshot()?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Failed to create {}", out))?;
            wtr.write_record(["id", "date", "amount", "description", "source", "recurring"])?;
            for i in &ds.income {
                wtr.write_record([
                    i.id.to_string(),
                    fmt_timestamp(&i.date),
                    i.amount.to_string(),
                    i.description.clone(),
                    i.source.to_string(),
                    i.recurring.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&ds.income)?)
                .with_context(|| format!("Failed to write {}", out))?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} income records to {}", ds.income.len(), out);
    Ok(())
}
