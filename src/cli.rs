// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

use crate::config::DEFAULT_CURRENCY;

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn amount_arg() -> Arg {
    Arg::new("amount")
        .long("amount")
        .required(true)
        .allow_hyphen_values(true)
}

fn description_arg() -> Arg {
    Arg::new("description")
        .long("description")
        .short('d')
        .default_value("")
}

fn limit_arg() -> Arg {
    Arg::new("limit")
        .long("limit")
        .value_parser(value_parser!(usize))
}

pub fn build_cli() -> Command {
    Command::new("walletwise")
        .version(crate_version!())
        .about("Personal expense, income, loan and budget tracker")
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .env("WALLETWISE_DATA_DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding main_data.json and auth.dat"),
        )
        .arg(
            Arg::new("password")
                .long("password")
                .short('p')
                .global(true)
                .env("WALLETWISE_PASSWORD")
                .hide_env_values(true)
                .help("Password unlocking the data file"),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .global(true)
                .env("WALLETWISE_CURRENCY")
                .default_value(DEFAULT_CURRENCY)
                .help("Label printed in front of amounts"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("password")
                .about("Set or check the access password")
                .subcommand_required(true)
                .subcommand(
                    Command::new("set").arg(
                        Arg::new("new")
                            .long("new")
                            .required(true)
                            .help("New password, at least 4 characters"),
                    ),
                )
                .subcommand(Command::new("check")),
        )
        .subcommand(json_flags(
            Command::new("summary").about("Dashboard totals: income, expenses, balance, loans"),
        ))
        .subcommand(
            Command::new("expense")
                .about("Record and list expenses")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .arg(amount_arg())
                        .arg(description_arg())
                        .arg(Arg::new("category").long("category").short('c').required(true))
                        .arg(Arg::new("payment").long("payment").required(true))
                        .arg(Arg::new("recurring").long("recurring").default_value("No")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(Arg::new("category").long("category").short('c'))
                        .arg(Arg::new("period").long("period"))
                        .arg(limit_arg()),
                )),
        )
        .subcommand(
            Command::new("income")
                .about("Record and list income")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .arg(amount_arg())
                        .arg(description_arg())
                        .arg(Arg::new("source").long("source").short('s').required(true))
                        .arg(Arg::new("recurring").long("recurring").default_value("No")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(Arg::new("source").long("source").short('s'))
                        .arg(Arg::new("period").long("period"))
                        .arg(limit_arg()),
                )),
        )
        .subcommand(
            Command::new("loan")
                .about("Track money lent and borrowed")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .arg(amount_arg())
                        .arg(Arg::new("person").long("person").required(true))
                        .arg(description_arg())
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .short('t')
                                .required(true)
                                .help("given or taken"),
                        )
                        .arg(
                            Arg::new("due")
                                .long("due")
                                .default_value("")
                                .help("Due date, YYYY-MM-DD"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .short('t')
                                .default_value("given"),
                        )
                        .arg(
                            Arg::new("status")
                                .long("status")
                                .default_value("active")
                                .help("active or settled"),
                        ),
                ))
                .subcommand(
                    Command::new("settle").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(u64)),
                    ),
                ),
        )
        .subcommand(json_flags(
            Command::new("search")
                .about("Find expenses and income by description")
                .arg(Arg::new("term").long("term").default_value(""))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .short('t')
                        .default_value("All")
                        .help("All, Expenses or Income"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .short('c')
                        .default_value("All Categories"),
                ),
        ))
        .subcommand(json_flags(
            Command::new("report")
                .about("Income and spending breakdown for a period")
                .arg(
                    Arg::new("period")
                        .long("period")
                        .default_value("This Month")
                        .help("This Week, This Month, Last Month, This Year or All Time"),
                ),
        ))
        .subcommand(
            Command::new("budget")
                .about("Monthly budgets per category")
                .subcommand_required(true)
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("category").long("category").short('c').required(true))
                        .arg(amount_arg()),
                )
                .subcommand(json_flags(Command::new("list"))),
        )
        .subcommand(
            Command::new("export")
                .about("Write records to CSV or JSON")
                .subcommand_required(true)
                .subcommand(export_cmd("expenses"))
                .subcommand(export_cmd("income")),
        )
}

fn export_cmd(name: &'static str) -> Command {
    Command::new(name)
        .arg(
            Arg::new("format")
                .long("format")
                .default_value("csv")
                .help("csv or json"),
        )
        .arg(Arg::new("out").long("out").short('o').required(true))
}
