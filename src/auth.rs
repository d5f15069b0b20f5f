// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::{LedgerError, Result};
use crate::store::write_atomic;

pub const MIN_PASSWORD_LEN: usize = 4;

/// Gate in front of the data file. Only a hex SHA-256 of the password is kept on
/// disk; the data itself is not encrypted.
#[derive(Debug, Clone)]
pub struct Authenticator {
    path: PathBuf,
    hash: Option<String>,
}

impl Authenticator {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let hash = match fs::read_to_string(&path) {
            Ok(raw) => Some(raw.trim().to_string()).filter(|h| !h.is_empty()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), configured = hash.is_some(), "Opened auth file");
        Ok(Authenticator { path, hash })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_configured(&self) -> bool {
        self.hash.is_some()
    }

    pub fn set_password(&mut self, password: &str) -> Result<()> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(LedgerError::validation(format!(
                "Password must be at least {} characters!",
                MIN_PASSWORD_LEN
            )));
        }
        let hash = hash_password(password);
        write_atomic(&self.path, hash.as_bytes())?;
        self.hash = Some(hash);
        info!("Password updated");
        Ok(())
    }

    /// Always false while no password has been set.
    pub fn verify(&self, password: &str) -> bool {
        self.hash
            .as_deref()
            .is_some_and(|h| h == hash_password(password))
    }
}

pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
