//! Flat-file user store

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::result::Result;
use crate::domain::{append_record, parse_users};
use crate::ports::UserStore;

/// User store backed by a newline-delimited text file
///
/// Reads take a shared advisory lock and appends an exclusive one, so a
/// reader never sees half of an appended line. Locks are released when the
/// file handle is dropped.
#[derive(Debug, Clone)]
pub struct FileUserStore {
    path: PathBuf,
}

impl FileUserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserStore for FileUserStore {
    fn ensure_exists(&self) -> Result<bool> {
        match OpenOptions::new().write(true).create_new(true).open(&self.path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn read_users(&self) -> Result<Vec<String>> {
        let mut file = File::open(&self.path)?;
        FileExt::lock_shared(&file)?;

        let mut content = String::new();
        file.read_to_string(&mut content)?;

        Ok(parse_users(&content))
    }

    fn append_user(&self, username: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        FileExt::lock_exclusive(&file)?;

        file.write_all(append_record(username).as_bytes())?;
        file.flush()?;

        Ok(())
    }
}
