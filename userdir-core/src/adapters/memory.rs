//! In-memory user store

use std::io;
use std::sync::{Mutex, MutexGuard};

use crate::domain::result::Result;
use crate::domain::{append_record, parse_users};
use crate::ports::UserStore;

/// User store holding the raw text in memory
///
/// Mirrors the file adapter byte for byte, including the missing-resource
/// case (`None`), so service behaviour can be tested without a filesystem.
#[derive(Debug)]
pub struct InMemoryUserStore {
    content: Mutex<Option<String>>,
}

impl InMemoryUserStore {
    /// An existing, empty store
    pub fn new() -> Self {
        Self::with_content("")
    }

    /// A store with the given raw content
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Mutex::new(Some(content.into())),
        }
    }

    /// A store whose backing resource does not exist
    pub fn missing() -> Self {
        Self {
            content: Mutex::new(None),
        }
    }

    /// Snapshot of the raw content
    pub fn content(&self) -> Result<Option<String>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<String>>> {
        self.content
            .lock()
            .map_err(|e| io::Error::other(format!("Lock poisoned: {}", e)).into())
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserStore {
    fn ensure_exists(&self) -> Result<bool> {
        let mut content = self.lock()?;
        if content.is_some() {
            return Ok(false);
        }
        *content = Some(String::new());
        Ok(true)
    }

    fn read_users(&self) -> Result<Vec<String>> {
        match self.lock()?.as_deref() {
            Some(content) => Ok(parse_users(content)),
            None => {
                Err(io::Error::new(io::ErrorKind::NotFound, "user store does not exist").into())
            }
        }
    }

    fn append_user(&self, username: &str) -> Result<()> {
        self.lock()?
            .get_or_insert_with(String::new)
            .push_str(&append_record(username));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::result::Error;

    #[test]
    fn test_new_store_reads_single_empty_entry() {
        let store = InMemoryUserStore::new();
        assert_eq!(store.read_users().unwrap(), vec![""]);
    }

    #[test]
    fn test_missing_store_fails_to_read() {
        let store = InMemoryUserStore::missing();
        assert!(matches!(store.read_users(), Err(Error::Storage(_))));
    }

    #[test]
    fn test_ensure_exists() {
        let store = InMemoryUserStore::missing();
        assert!(store.ensure_exists().unwrap());
        assert!(!store.ensure_exists().unwrap());
        assert_eq!(store.content().unwrap(), Some(String::new()));
    }

    #[test]
    fn test_append_matches_file_layout() {
        let store = InMemoryUserStore::with_content("alice");
        store.append_user("bob").unwrap();
        assert_eq!(store.content().unwrap().as_deref(), Some("alice\nbob"));
    }
}
