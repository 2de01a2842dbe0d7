//! Append-only visit journal.
//!
//! One plain-text file, one rendered block per recorded visit. The file is
//! opened in append mode for every write and the handle dropped when the
//! call returns, on success and failure alike, so a failed append never
//! keeps the journal open. There is no lock: writers rely on OS append-mode
//! semantics, and a concurrent reader may observe a partially appended
//! trailing block under contention.

use collecte_core::error::Result;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handle to the on-disk visit journal.
#[derive(Debug, Clone)]
pub struct VisitJournal {
    path: PathBuf,
}

impl VisitJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the journal file exists yet (it is created on first append).
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append one rendered block, creating the file and any missing parent
    /// directories on first use.
    pub fn append(&self, block: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(block.as_bytes())?;
        file.flush()?;

        debug!(path = %self.path.display(), bytes = block.len(), "Journal append");
        Ok(())
    }

    /// Read the whole journal. `None` when nothing has been recorded yet;
    /// any other read failure is surfaced to the caller.
    pub fn read_all(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
