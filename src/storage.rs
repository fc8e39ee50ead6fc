//! File-backed storage: one JSON document at a configured path

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::traits::LedgerStorage;
use crate::types::{LedgerError, LedgerResult};

/// Keeps the persisted blob as a single UTF-8 file on disk.
///
/// The local-storage analogue: a missing file reads as "nothing persisted
/// yet", and every write replaces the whole document.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStorage for FileStore {
    fn read(&self) -> LedgerResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(LedgerError::Storage(format!(
                "reading {}: {err}",
                self.path.display()
            ))),
        }
    }

    fn write(&mut self, payload: &str) -> LedgerResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| {
                    LedgerError::Storage(format!("creating {}: {err}", parent.display()))
                })?;
            }
        }

        fs::write(&self.path, payload).map_err(|err| {
            LedgerError::Storage(format!("writing {}: {err}", self.path.display()))
        })
    }
}
