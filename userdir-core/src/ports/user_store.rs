//! User store port - storage abstraction

use crate::domain::result::Result;

/// Storage for the ordered list of usernames
///
/// Implementations hold no cache: every call goes to the backing resource.
pub trait UserStore: Send + Sync {
    /// Create an empty store if none exists. Returns true if one was created.
    fn ensure_exists(&self) -> Result<bool>;

    /// Read every username in insertion order, literal split semantics
    fn read_users(&self) -> Result<Vec<String>>;

    /// Append one username to the end of the store
    fn append_user(&self, username: &str) -> Result<()>;
}
