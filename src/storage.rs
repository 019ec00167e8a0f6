//! On-disk persistence for the directory.
//!
//! The contacts file is a versioned JSON snapshot of every record:
//!
//! ```json
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "Alice", "phones": ["1234567890"], "birthday": "15.03.1990" }
//!   ]
//! }
//! ```
//!
//! Saves replace the whole file via a temporary sibling plus rename, so
//! a crash mid-write leaves the previous snapshot intact.

use crate::directory::Directory;
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Version written to and expected from the contacts file.
pub const FORMAT_VERSION: u32 = 1;

/// The serialized shape of the contacts file.
#[derive(Debug, Serialize, Deserialize)]
struct DirectoryFile {
    version: u32,
    contacts: Vec<Record>,
}

/// Loads and saves directory snapshots at a fixed path.
#[derive(Debug, Clone)]
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the directory from disk.
    ///
    /// A missing file yields an empty directory. Duplicate names inside
    /// the file collapse via the directory's upsert rule.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the file exists but cannot be read,
    /// is not valid contacts JSON, or carries an unsupported version.
    pub fn load(&self) -> StorageResult<Directory> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no contacts file, starting empty");
            return Ok(Directory::new());
        }

        let json = fs::read_to_string(&self.path)?;
        let file: DirectoryFile = serde_json::from_str(&json)?;
        if file.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion(file.version));
        }

        let directory: Directory = file.contacts.into_iter().collect();
        info!(
            path = %self.path.display(),
            contacts = directory.len(),
            "loaded contacts file"
        );
        Ok(directory)
    }

    /// Write a snapshot of the whole directory, replacing any prior
    /// content. The parent directory is created on demand.
    pub fn save(&self, directory: &Directory) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = DirectoryFile {
            version: FORMAT_VERSION,
            contacts: directory.iter().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        atomic_write(&self.path, json)?;
        debug!(
            path = %self.path.display(),
            contacts = directory.len(),
            "saved contacts file"
        );
        Ok(())
    }
}

/// Atomic write: write to a .tmp sibling then rename over the target.
fn atomic_write(path: &Path, contents: impl AsRef<[u8]>) -> StorageResult<()> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
