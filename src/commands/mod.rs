// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use crate::tracker::Tracker;

pub mod budgets;
pub mod expenses;
pub mod exporter;
pub mod income;
pub mod loans;
pub mod password;
pub mod reports;
pub mod search;

/// Every data command sits behind the password, like the login screen did.
pub fn ensure_authenticated(tracker: &Tracker, password: Option<&str>) -> Result<()> {
    if !tracker.has_password() {
        bail!("No password set yet; run `walletwise password set --new <PASSWORD>` first");
    }
    match password {
        Some(pw) if tracker.authenticate(pw) => Ok(()),
        Some(_) => bail!("Invalid password!"),
        None => bail!("Password required (--password or WALLETWISE_PASSWORD)"),
    }
}

/// String argument, empty when absent.
pub(crate) fn arg_str(m: &clap::ArgMatches, name: &str) -> String {
    m.get_one::<String>(name).cloned().unwrap_or_default()
}
