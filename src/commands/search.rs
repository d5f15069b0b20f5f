// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::arg_str;
use crate::config::Config;
use crate::tracker::Tracker;
use crate::utils::{fmt_date, fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(tracker: &Tracker, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let hits = tracker.search(
        &arg_str(sub, "term"),
        &arg_str(sub, "type"),
        &arg_str(sub, "category"),
    )?;
    if maybe_print_json(json_flag, jsonl_flag, &hits)? {
        return Ok(());
    }
    if hits.is_empty() {
        println!("No results found");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = hits
        .iter()
        .map(|h| {
            vec![
                h.label().to_string(),
                fmt_date(&h.date()),
                h.description().to_string(),
                h.tag().to_string(),
                fmt_money(&h.amount(), &cfg.currency),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Type", "Date", "Description", "Category / Source", "Amount"],
            rows
        )
    );
    Ok(())
}
