// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{add_expense_at, tracker_at};
use tempfile::tempdir;
use walletwise::{
    cli,
    commands::{expenses, exporter},
};

#[test]
fn expense_list_is_newest_first_with_limit() {
    let dir = tempdir().unwrap();
    let mut t = tracker_at(dir.path(), "2024-03-01 10:00:00");
    add_expense_at(&mut t, "2024-03-01 10:00:00", "10", "Food");
    add_expense_at(&mut t, "2024-03-02 10:00:00", "20", "Bills");
    add_expense_at(&mut t, "2024-03-03 10:00:00", "30", "Food");

    let matches =
        cli::build_cli().get_matches_from(["walletwise", "expense", "list", "--limit", "2"]);
    if let Some(("expense", exp_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = exp_m.subcommand() {
            let rows = expenses::query_rows(&t, list_m).unwrap();
            assert_eq!(rows.iter().map(|e| e.id).collect::<Vec<_>>(), vec![3, 2]);
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no expense subcommand");
    }

    let matches = cli::build_cli().get_matches_from([
        "walletwise",
        "expense",
        "list",
        "--category",
        "food",
        "--period",
        "this month",
    ]);
    let list_m = matches
        .subcommand_matches("expense")
        .and_then(|m| m.subcommand_matches("list"))
        .unwrap();
    let rows = expenses::query_rows(&t, list_m).unwrap();
    assert_eq!(rows.iter().map(|e| e.id).collect::<Vec<_>>(), vec![3, 1]);
}

#[test]
fn global_options_reach_subcommands() {
    let matches = cli::build_cli().get_matches_from([
        "walletwise",
        "report",
        "--period",
        "Last Month",
        "--data-dir",
        "/tmp/ww",
        "--currency",
        "INR",
        "--json",
    ]);
    let cfg = walletwise::config::Config::from_matches(&matches).unwrap();
    assert_eq!(cfg.data_dir, std::path::PathBuf::from("/tmp/ww"));
    assert_eq!(cfg.currency, "INR");
    let report_m = matches.subcommand_matches("report").unwrap();
    assert_eq!(report_m.get_one::<String>("period").unwrap(), "Last Month");
    assert!(report_m.get_flag("json"));
}

#[test]
fn export_expenses_csv() {
    let dir = tempdir().unwrap();
    let mut t = tracker_at(dir.path(), "2024-03-01 10:00:00");
    add_expense_at(&mut t, "2024-03-01 10:00:00", "12.5", "Food");
    add_expense_at(&mut t, "2024-03-02 11:30:00", "40", "Transport");

    let out_path = dir.path().join("expenses.csv");
    let out_str = out_path.to_string_lossy().to_string();
    let matches = cli::build_cli().get_matches_from([
        "walletwise",
        "export",
        "expenses",
        "--format",
        "csv",
        "--out",
        &out_str,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&t, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        vec![
            "id,date,amount,description,category,payment_method,recurring",
            "1,2024-03-01 10:00:00,12.5,,Food,Card,No",
            "2,2024-03-02 11:30:00,40,,Transport,Card,No",
        ]
    );
}

#[test]
fn export_income_json_and_rejects_unknown_format() {
    let dir = tempdir().unwrap();
    let t = tracker_at(dir.path(), "2024-03-01 10:00:00");
    t.add_income(&common::income("1500", "March pay", "Salary"))
        .unwrap();

    let out_path = dir.path().join("income.json");
    let out_str = out_path.to_string_lossy().to_string();
    let matches = cli::build_cli().get_matches_from([
        "walletwise", "export", "income", "--format", "json", "--out", &out_str,
    ]);
    let export_m = matches.subcommand_matches("export").unwrap();
    exporter::handle(&t, export_m).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([{
            "amount": 1500.0,
            "description": "March pay",
            "source": "Salary",
            "recurring": "Monthly",
            "date": "2024-03-01 10:00:00",
            "id": 1
        }])
    );

    let matches = cli::build_cli().get_matches_from([
        "walletwise", "export", "income", "--format", "xml", "--out", &out_str,
    ]);
    let export_m = matches.subcommand_matches("export").unwrap();
    assert!(exporter::handle(&t, export_m).is_err());
}
