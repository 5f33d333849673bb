//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - Local filesystem for the UserStore port
//! - In-memory store for tests and embedding

pub mod file;
pub mod memory;
