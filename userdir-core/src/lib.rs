//! User Directory Core - Business logic for the user directory service
//!
//! This crate implements the core logic following hexagonal architecture:
//!
//! - **domain**: Usernames, store parsing rules and the error type
//! - **ports**: Trait definitions for external dependencies (UserStore)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (flat file, in-memory)

pub mod domain;
pub mod ports;
pub mod services;
pub mod adapters;
pub mod config;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use adapters::file::FileUserStore;
use config::Config;
use services::UserService;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::NewUser;
pub use ports::UserStore;

/// Main context for user directory operations
///
/// Holds the configuration, the store handle and the services built on it.
/// The HTTP layer only talks to this.
pub struct UserDirContext {
    pub config: Config,
    pub store: Arc<FileUserStore>,
    pub user_service: Arc<UserService>,
}

impl UserDirContext {
    /// Create a new context rooted at `data_dir`
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;

        let store = Arc::new(FileUserStore::new(config.store_path(data_dir)));

        if config.store.create_if_missing {
            let created = store
                .ensure_exists()
                .with_context(|| format!("Failed to create user store at {:?}", store.path()))?;
            if created {
                tracing::info!(path = %store.path().display(), "created empty user store");
            }
        }

        let user_service = Arc::new(UserService::new(store.clone()));

        Ok(Self {
            config,
            store,
            user_service,
        })
    }
}
