//! Core domain types
//!
//! Pure data structures and parsing rules - no I/O or external dependencies.

mod user;
pub mod result;

pub use user::{
    added_message, append_record, parse_users, NewUser, LINE_SEPARATOR, MISSING_USER_MSG,
    MULTILINE_USER_MSG, NOT_A_STRING_MSG, USER_EXISTS_MSG,
};
