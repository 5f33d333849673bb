//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The service layer
//! depends only on these traits, not on concrete implementations.

mod user_store;

pub use user_store::UserStore;
