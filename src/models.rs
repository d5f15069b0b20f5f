// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Declares a closed string enumeration that still round-trips labels it does not
/// recognise through `Unknown`.
macro_rules! closed_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Unknown(String),
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Unknown(raw) => raw,
                }
            }

            /// Case-insensitive match against the known labels only.
            pub fn parse_known(s: &str) -> Option<Self> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .cloned()
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::ALL
                    .iter()
                    .find(|v| v.as_str() == raw)
                    .cloned()
                    .unwrap_or($name::Unknown(raw))
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> String {
                match v {
                    $name::Unknown(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_enum!(
    /// Expense category, also the key of the budget map.
    Category {
        Food => "Food",
        Transport => "Transport",
        Shopping => "Shopping",
        Bills => "Bills",
        Entertainment => "Entertainment",
        Health => "Health",
        Education => "Education",
        Other => "Other",
    }
);

closed_enum!(PaymentMethod {
    Cash => "Cash",
    Card => "Card",
    Upi => "UPI",
    BankTransfer => "Bank Transfer",
});

closed_enum!(ExpenseRecurrence {
    No => "No",
    Daily => "Daily",
    Weekly => "Weekly",
    Monthly => "Monthly",
});

closed_enum!(IncomeSource {
    Salary => "Salary",
    Freelance => "Freelance",
    Investment => "Investment",
    Gift => "Gift",
    LoanReturned => "Loan Returned",
    Business => "Business",
    Other => "Other",
});

closed_enum!(IncomeRecurrence {
    No => "No",
    Weekly => "Weekly",
    Monthly => "Monthly",
    Yearly => "Yearly",
});

closed_enum!(
    /// Direction of a loan: money lent out or borrowed.
    LoanType {
        Given => "given",
        Taken => "taken",
    }
);

closed_enum!(LoanStatus {
    Active => "active",
    Settled => "settled",
});

impl Default for LoanStatus {
    fn default() -> Self {
        LoanStatus::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Expenses,
    Income,
    Loans,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Collection::Expenses => "expenses",
            Collection::Income => "income",
            Collection::Loans => "loans",
        })
    }
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&dt.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(de::Error::custom)
    }
}

mod timestamp_opt {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(dt: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => s.collect_str(&dt.format(TIMESTAMP_FORMAT)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(d)? {
            Some(raw) => NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
                .map(Some)
                .map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub payment_method: PaymentMethod,
    pub recurring: ExpenseRecurrence,
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    pub source: IncomeSource,
    pub recurring: IncomeRecurrence,
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub amount: Decimal,
    pub person: String,
    #[serde(default)]
    pub description: String,
    pub r#type: LoanType,
    #[serde(default)]
    pub due_date: String,
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,
    #[serde(default)]
    pub status: LoanStatus,
    pub id: u64,
    #[serde(
        default,
        with = "timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub settled_date: Option<NaiveDateTime>,
}

impl Loan {
    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }
}

/// The whole persisted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub income: Vec<Income>,
    #[serde(default)]
    pub loans: Vec<Loan>,
    #[serde(default)]
    pub budgets: BTreeMap<Category, Decimal>,
}

/// A record kind stored in one of the dataset's sequential-id collections.
pub trait Record: Clone {
    const COLLECTION: Collection;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
    fn amount(&self) -> Decimal;
    fn description(&self) -> &str;
    fn timestamp(&self) -> NaiveDateTime;

    fn records(ds: &Dataset) -> &Vec<Self>;
    fn records_mut(ds: &mut Dataset) -> &mut Vec<Self>;
}

macro_rules! impl_record {
    ($ty:ty, $collection:expr, $field:ident) => {
        impl Record for $ty {
            const COLLECTION: Collection = $collection;

            fn id(&self) -> u64 {
                self.id
            }
            fn set_id(&mut self, id: u64) {
                self.id = id;
            }
            fn amount(&self) -> Decimal {
                self.amount
            }
            fn description(&self) -> &str {
                &self.description
            }
            fn timestamp(&self) -> NaiveDateTime {
                self.date
            }
            fn records(ds: &Dataset) -> &Vec<Self> {
                &ds.$field
            }
            fn records_mut(ds: &mut Dataset) -> &mut Vec<Self> {
                &mut ds.$field
            }
        }
    };
}

impl_record!(Expense, Collection::Expenses, expenses);
impl_record!(Income, Collection::Income, income);
impl_record!(Loan, Collection::Loans, loans);

impl Dataset {
    pub fn len(&self, collection: Collection) -> usize {
        match collection {
            Collection::Expenses => self.expenses.len(),
            Collection::Income => self.income.len(),
            Collection::Loans => self.loans.len(),
        }
    }

    /// Size based: ids collide once anything is deleted, and nothing is.
    pub fn next_id(&self, collection: Collection) -> u64 {
        self.len(collection) as u64 + 1
    }

    /// Assigns the next id to `record` and appends it.
    pub fn push<R: Record>(&mut self, mut record: R) -> R {
        record.set_id(self.next_id(R::COLLECTION));
        R::records_mut(self).push(record.clone());
        record
    }

    pub fn find<R: Record>(&self, id: u64) -> Result<&R> {
        R::records(self)
            .iter()
            .find(|r| r.id() == id)
            .ok_or(LedgerError::NotFound {
                collection: R::COLLECTION,
                id,
            })
    }

    pub fn find_mut<R: Record>(&mut self, id: u64) -> Result<&mut R> {
        R::records_mut(self)
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(LedgerError::NotFound {
                collection: R::COLLECTION,
                id,
            })
    }

    pub fn budget_for(&self, category: &Category) -> Decimal {
        self.budgets.get(category).copied().unwrap_or(Decimal::ZERO)
    }
}
