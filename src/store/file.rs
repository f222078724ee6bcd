//! FileListingStore - the production backend, one JSON file on disk.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{decode, encode, ListingStore, StoreError};
use crate::listing::Listing;

/// Listings store backed by a single pretty-printed JSON file.
///
/// Writes go to `<file>.tmp`, are synced, then renamed over the target, so a
/// crash mid-write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct FileListingStore {
    path: PathBuf,
}

impl FileListingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn create_parent(&self) -> Result<(), StoreError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))
            }
            _ => Ok(()),
        }
    }

    fn write_atomic(&self, bytes: &[u8]) -> Result<(), StoreError> {
        let temp = self.temp_path();
        let io = |e: std::io::Error| StoreError::Io(format!("{}: {}", temp.display(), e));

        {
            let mut file = fs::File::create(&temp).map_err(io)?;
            file.write_all(bytes).map_err(io)?;
            file.sync_all().map_err(io)?;
        }

        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(StoreError::Io(format!("{}: {}", self.path.display(), e)));
        }
        Ok(())
    }
}

impl ListingStore for FileListingStore {
    fn ensure_exists(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        self.create_parent()?;
        debug!(path = %self.path.display(), "creating empty listings document");
        self.write_atomic(&encode(&[])?)
    }

    fn read(&self) -> Result<Vec<Listing>, StoreError> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::Missing(self.path.display().to_string()),
            _ => StoreError::Io(format!("{}: {}", self.path.display(), e)),
        })?;
        decode(&bytes)
    }

    fn write(&self, listings: &[Listing]) -> Result<(), StoreError> {
        let bytes = encode(listings)?;
        self.write_atomic(&bytes)
    }
}
