// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use walletwise::{Tracker, cli, commands, config::Config, log::init_logging};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    init_logging(matches.get_flag("verbose"));

    let cfg = Config::from_matches(&matches)?;
    cfg.ensure_data_dir()?;
    let mut tracker = Tracker::open(&cfg)?;
    let password = matches.get_one::<String>("password").map(String::as_str);

    let result = match matches.subcommand() {
        Some(("password", sub)) => commands::password::handle(&mut tracker, sub, password),
        Some((name, sub)) => commands::ensure_authenticated(&tracker, password).and_then(|_| {
            match name {
                "summary" => commands::reports::summary(&tracker, &cfg, sub),
                "expense" => commands::expenses::handle(&tracker, &cfg, sub),
                "income" => commands::income::handle(&tracker, &cfg, sub),
                "loan" => commands::loans::handle(&tracker, &cfg, sub),
                "search" => commands::search::handle(&tracker, &cfg, sub),
                "report" => commands::reports::handle(&tracker, &cfg, sub),
                "budget" => commands::budgets::handle(&tracker, &cfg, sub),
                "export" => commands::exporter::handle(&tracker, sub),
                _ => Ok(()),
            }
        }),
        None => {
            cli::build_cli().print_help()?;
            println!();
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Command failed");
    }
    result
}
