//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions.

mod user;

pub use user::UserService;
