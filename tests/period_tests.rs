// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use chrono::NaiveDate;
use common::ts;
use walletwise::period::{Period, resolve};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn month_to_date_in_leap_year() {
    let now = ts("2024-03-15 18:45:10");

    let r = resolve(Period::ThisMonth, now);
    assert_eq!(r.start, ts("2024-03-01 00:00:00"));
    assert_eq!(r.end, now);

    let r = resolve(Period::LastMonth, now);
    assert_eq!(r.start.date(), day("2024-02-01"));
    assert_eq!(r.end.date(), day("2024-02-29"));
    assert!(r.contains(ts("2024-02-29 23:59:59")));
    assert!(!r.contains(ts("2024-03-01 00:00:00")));

    let r = resolve(Period::ThisYear, now);
    assert_eq!(r.start.date(), day("2024-01-01"));
    assert_eq!(r.end.date(), day("2024-03-15"));
}

#[test]
fn this_week_starts_on_monday() {
    // 2024-03-15 is a Friday.
    let r = resolve(Period::ThisWeek, ts("2024-03-15 08:00:00"));
    assert_eq!(r.start, ts("2024-03-11 00:00:00"));

    let monday = ts("2024-03-11 07:30:00");
    assert_eq!(resolve(Period::ThisWeek, monday).start, ts("2024-03-11 00:00:00"));
}

#[test]
fn last_month_wraps_year() {
    let r = resolve(Period::LastMonth, ts("2025-01-10 12:00:00"));
    assert_eq!(r.start, ts("2024-12-01 00:00:00"));
    assert_eq!(r.end, ts("2024-12-31 23:59:59"));
}

#[test]
fn all_time_has_fixed_floor() {
    let now = ts("2024-03-15 10:00:00");
    let r = resolve(Period::AllTime, now);
    assert_eq!(r.start, ts("2000-01-01 00:00:00"));
    assert_eq!(r.end, now);
    assert!(!r.contains(ts("1999-12-31 23:59:59")));
}

#[test]
fn bounds_are_inclusive() {
    let now = ts("2024-03-15 10:00:00");
    let r = resolve(Period::ThisMonth, now);
    assert!(r.contains(r.start));
    assert!(r.contains(now));
    assert!(!r.contains(ts("2024-03-15 10:00:01")));
}

#[test]
fn tokens_parse_loosely() {
    assert_eq!("This Week".parse::<Period>().unwrap(), Period::ThisWeek);
    assert_eq!("last-month".parse::<Period>().unwrap(), Period::LastMonth);
    assert_eq!(" ALL_TIME ".parse::<Period>().unwrap(), Period::AllTime);
    assert_eq!("year".parse::<Period>().unwrap(), Period::ThisYear);
    assert!("fortnight".parse::<Period>().is_err());
}
