// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod auth;
pub mod budget;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod forms;
pub mod loans;
pub mod log;
pub mod models;
pub mod period;
pub mod store;
pub mod tracker;
pub mod utils;

pub use error::{LedgerError, Result};
pub use tracker::{Clock, Tracker};
