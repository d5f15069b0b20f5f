// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Walletwise", "walletwise"));

pub const DATA_FILE: &str = "main_data.json";
pub const AUTH_FILE: &str = "auth.dat";
pub const DEFAULT_CURRENCY: &str = "Rs.";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    /// Label printed in front of amounts. Display only; nothing is converted.
    pub currency: String,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Config {
            data_dir: data_dir.into(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn default_data_dir() -> Result<PathBuf> {
        let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
            .context("Could not determine platform-specific data dir")?;
        Ok(proj.data_dir().to_path_buf())
    }

    /// Flag and env values arrive through clap; anything missing falls back to the
    /// platform data dir.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let data_dir = match m.get_one::<PathBuf>("data-dir") {
            Some(dir) => dir.clone(),
            None => Self::default_data_dir()?,
        };
        let mut cfg = Config::new(data_dir);
        if let Some(ccy) = m.get_one::<String>("currency") {
            cfg.currency = ccy.trim().to_string();
        }
        debug!(data_dir = %cfg.data_dir.display(), currency = %cfg.currency, "Resolved config");
        Ok(cfg)
    }

    pub fn ensure_data_dir(&self) -> Result<&Path> {
        fs::create_dir_all(&self.data_dir).with_context(|| {
            format!("Failed to create data dir {}", self.data_dir.display())
        })?;
        Ok(&self.data_dir)
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE)
    }

    pub fn auth_file(&self) -> PathBuf {
        self.data_dir.join(AUTH_FILE)
    }
}
