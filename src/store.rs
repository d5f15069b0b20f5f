// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Flat-file JSON record store.
//!
//! Every operation reads the whole document, works on it in memory and writes the
//! whole document back. Writes go to a temp file in the same directory which is then
//! renamed over the target, so a crash never leaves a truncated document behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{LedgerError, Result};
use crate::models::{Collection, Dataset, Record};

#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        RecordStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means a fresh, empty dataset. Anything unreadable is an error.
    pub fn load(&self) -> Result<Dataset> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No data file yet, starting empty");
                return Ok(Dataset::default());
            }
            Err(e) => return Err(e.into()),
        };
        let ds: Dataset =
            serde_json::from_str(&raw).map_err(|source| LedgerError::StorageCorrupt {
                path: self.path.clone(),
                source,
            })?;
        debug!(
            expenses = ds.expenses.len(),
            income = ds.income.len(),
            loans = ds.loans.len(),
            budgets = ds.budgets.len(),
            "Loaded dataset"
        );
        Ok(ds)
    }

    pub fn save(&self, ds: &Dataset) -> Result<()> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        ds.serialize(&mut ser).map_err(io::Error::from)?;
        write_atomic(&self.path, &buf)?;
        debug!(path = %self.path.display(), bytes = buf.len(), "Saved dataset");
        Ok(())
    }

    pub fn next_id(&self, collection: Collection) -> Result<u64> {
        Ok(self.load()?.next_id(collection))
    }

    /// Assigns the next sequential id and persists the record.
    pub fn append<R: Record>(&self, record: R) -> Result<R> {
        self.modify(|ds| Ok(ds.push(record)))
            .inspect(|r| info!(collection = %R::COLLECTION, id = r.id(), "Appended record"))
    }

    /// Applies `mutation` to the record with `id`. If it fails nothing is written.
    pub fn update_by_id<R, F>(&self, id: u64, mutation: F) -> Result<R>
    where
        R: Record,
        F: FnOnce(&mut R) -> Result<()>,
    {
        self.modify(|ds| {
            let record = ds.find_mut::<R>(id)?;
            mutation(record)?;
            Ok(record.clone())
        })
        .inspect(|_| info!(collection = %R::COLLECTION, id, "Updated record"))
    }

    /// Load, run `f`, and save only if `f` succeeded.
    pub fn modify<T>(&self, f: impl FnOnce(&mut Dataset) -> Result<T>) -> Result<T> {
        let mut ds = self.load()?;
        let out = f(&mut ds)?;
        self.save(&ds)?;
        Ok(out)
    }
}

pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
