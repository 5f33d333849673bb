//! User service - listing and adding users

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::result::{Error, Result};
use crate::domain::{NewUser, USER_EXISTS_MSG};
use crate::ports::UserStore;

/// Service for the user list
///
/// Adds are serialized through `write_lock` so the duplicate check and the
/// append happen as one step for all callers sharing this service.
pub struct UserService {
    store: Arc<dyn UserStore>,
    write_lock: Mutex<()>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// List every stored username in insertion order
    pub fn list_users(&self) -> Result<Vec<String>> {
        self.store.read_users()
    }

    /// Add a user unless an entry with exactly the same name exists
    pub fn add_user(&self, user: &NewUser) -> Result<()> {
        // The guard protects no data, so a poisoned lock is still usable.
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let existing = self.store.read_users()?;
        if existing.iter().any(|name| name == user.as_str()) {
            tracing::warn!(user = %user, "rejected duplicate user");
            return Err(Error::conflict(USER_EXISTS_MSG));
        }

        self.store.append_user(user.as_str())?;
        tracing::info!(user = %user, "added user");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserStore;

    fn service_with(content: &str) -> (Arc<InMemoryUserStore>, UserService) {
        let store = Arc::new(InMemoryUserStore::with_content(content));
        let service = UserService::new(store.clone());
        (store, service)
    }

    fn user(name: &str) -> NewUser {
        NewUser::try_from(name).unwrap()
    }

    #[test]
    fn test_list_is_idempotent() {
        let (_, service) = service_with("alice\nbob");
        assert_eq!(service.list_users().unwrap(), service.list_users().unwrap());
    }

    #[test]
    fn test_add_grows_list_by_one() {
        let (_, service) = service_with("");
        let before = service.list_users().unwrap();

        service.add_user(&user("bob")).unwrap();

        let after = service.list_users().unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last().map(String::as_str), Some("bob"));
        assert_eq!(after, vec!["", "bob"]);
    }

    #[test]
    fn test_duplicate_is_rejected_and_store_unchanged() {
        let (store, service) = service_with("\nalice");

        let err = service.add_user(&user("alice")).unwrap_err();

        assert!(matches!(err, Error::Conflict(ref m) if m == USER_EXISTS_MSG));
        assert_eq!(store.content().unwrap().as_deref(), Some("\nalice"));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let (_, service) = service_with("\nalice");
        service.add_user(&user("Alice")).unwrap();
        assert_eq!(service.list_users().unwrap(), vec!["", "alice", "Alice"]);
    }

    #[test]
    fn test_missing_store_fails_add_without_writing() {
        let store = Arc::new(InMemoryUserStore::missing());
        let service = UserService::new(store.clone());

        assert!(matches!(service.add_user(&user("bob")), Err(Error::Storage(_))));
        assert_eq!(store.content().unwrap(), None);
    }
}
