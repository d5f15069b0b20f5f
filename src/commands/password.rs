// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::ensure_authenticated;
use crate::tracker::Tracker;
use anyhow::Result;

pub fn handle(tracker: &mut Tracker, m: &clap::ArgMatches, password: Option<&str>) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            // Replacing an existing password needs the current one.
            if tracker.has_password() {
                ensure_authenticated(tracker, password)?;
            }
            let new = sub.get_one::<String>("new").map(String::as_str).unwrap_or("");
            tracker.set_password(new)?;
            println!("Password set successfully! Please login.");
        }
        Some(("check", _)) => {
            ensure_authenticated(tracker, password)?;
            println!("Password OK");
        }
        _ => {}
    }
    Ok(())
}
