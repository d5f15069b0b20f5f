// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Serialize, Serializer};

use crate::error::LedgerError;

/// Lower bound for "All Time".
pub const EPOCH_FLOOR: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(d) => d,
    None => panic!("invalid epoch floor"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    ThisWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
    AllTime,
}

/// Inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    #[serde(serialize_with = "serialize_timestamp")]
    pub start: NaiveDateTime,
    #[serde(serialize_with = "serialize_timestamp")]
    pub end: NaiveDateTime,
}

fn serialize_timestamp<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&dt.format(crate::models::TIMESTAMP_FORMAT))
}

impl DateRange {
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start <= ts && ts <= self.end
    }

    /// First of `now`'s month up to `now`.
    pub fn month_to_date(now: NaiveDateTime) -> Self {
        DateRange {
            start: start_of_day(first_of_month(now.date())),
            end: now,
        }
    }
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::ThisWeek,
        Period::ThisMonth,
        Period::LastMonth,
        Period::ThisYear,
        Period::AllTime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Period::ThisWeek => "This Week",
            Period::ThisMonth => "This Month",
            Period::LastMonth => "Last Month",
            Period::ThisYear => "This Year",
            Period::AllTime => "All Time",
        }
    }

    /// Start bounds are pulled back to midnight; end is `now` except for
    /// `LastMonth`, which ends on the last second of the previous month.
    pub fn resolve(self, now: NaiveDateTime) -> DateRange {
        let today = now.date();
        match self {
            Period::ThisWeek => {
                let back = u64::from(today.weekday().num_days_from_monday());
                DateRange {
                    start: start_of_day(today - Days::new(back)),
                    end: now,
                }
            }
            Period::ThisMonth => DateRange::month_to_date(now),
            Period::LastMonth => {
                let this_month = start_of_day(first_of_month(today));
                let prev_last_day = first_of_month(today) - Days::new(1);
                DateRange {
                    start: start_of_day(first_of_month(prev_last_day)),
                    end: this_month - TimeDelta::seconds(1),
                }
            }
            Period::ThisYear => DateRange {
                start: start_of_day(today - Days::new(u64::from(today.ordinal0()))),
                end: now,
            },
            Period::AllTime => DateRange {
                start: start_of_day(EPOCH_FLOOR),
                end: now,
            },
        }
    }
}

pub fn resolve(period: Period, now: NaiveDateTime) -> DateRange {
    period.resolve(now)
}

fn start_of_day(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::MIN)
}

fn first_of_month(d: NaiveDate) -> NaiveDate {
    d - Days::new(u64::from(d.day0()))
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.label())
    }
}

impl FromStr for Period {
    type Err = LedgerError;

    /// Accepts "This Week", "this-week", "this_week" or just "week", and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_lowercase().replace(['-', '_'], " ");
        let period = match norm.as_str() {
            "this week" | "week" => Period::ThisWeek,
            "this month" | "month" => Period::ThisMonth,
            "last month" => Period::LastMonth,
            "this year" | "year" => Period::ThisYear,
            "all time" | "all" => Period::AllTime,
            _ => {
                return Err(LedgerError::validation(format!(
                    "Unknown period '{}', expected one of: {}",
                    s.trim(),
                    Period::ALL.map(|p| p.label()).join(", ")
                )));
            }
        };
        Ok(period)
    }
}
