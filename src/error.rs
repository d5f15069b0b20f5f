// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use crate::models::Collection;

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Rejected input; nothing was written.
    #[error("{0}")]
    Validation(String),

    #[error("Data file {} is corrupt: {source}", .path.display())]
    StorageCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No {collection} record with id {id}")]
    NotFound { collection: Collection, id: u64 },

    #[error("Loan {0} is already settled")]
    AlreadySettled(u64),

    /// Arithmetic over stored amounts left the `Decimal` range.
    #[error("Amounts too large to compute {0}")]
    Overflow(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LedgerError {
    pub fn validation(reason: impl Into<String>) -> Self {
        LedgerError::Validation(reason.into())
    }
}
