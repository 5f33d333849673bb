//! User domain model
//!
//! The store is a plain text blob with one username per line. Parsing is a
//! literal split on `\n`: an empty store reads as `[""]` and the leading
//! separator written by every append shows up as a leading empty entry.

use serde::Serialize;
use serde_json::Value;

use super::result::{Error, Result};

/// Separator between usernames in the store
pub const LINE_SEPARATOR: char = '\n';

/// Reply when the request carries no usable `user`
pub const MISSING_USER_MSG: &str = "`user` key is not present...";

/// Reply when `user` is truthy but not a string
pub const NOT_A_STRING_MSG: &str = "`user` must be a string...";

/// Reply when `user` would span more than one store line
pub const MULTILINE_USER_MSG: &str = "`user` must not contain a line break...";

/// Reply when the username is already stored
pub const USER_EXISTS_MSG: &str = "user already exists...";

/// Split raw store content into usernames.
///
/// Nothing is trimmed, deduplicated or filtered.
pub fn parse_users(content: &str) -> Vec<String> {
    content.split(LINE_SEPARATOR).map(str::to_owned).collect()
}

/// Text appended to the store for a new user.
///
/// Always starts with the separator, even if the store already ends in one.
pub fn append_record(username: &str) -> String {
    format!("{}{}", LINE_SEPARATOR, username)
}

/// Success reply for an added user
pub fn added_message(username: &str) -> String {
    format!("{} is added to users", username)
}

/// A username accepted for insertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NewUser(String);

impl NewUser {
    /// Validate the `user` field of an add request.
    ///
    /// Absent, `null`, `false`, `0` and `""` are all treated as missing.
    /// Strings go through the same checks as `TryFrom<&str>`.
    pub fn from_json(value: Option<&Value>) -> Result<Self> {
        match value {
            None | Some(Value::Null) | Some(Value::Bool(false)) => {
                Err(Error::validation(MISSING_USER_MSG))
            }
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
                Err(Error::validation(MISSING_USER_MSG))
            }
            Some(Value::String(s)) => Self::try_from(s.as_str()),
            Some(_) => Err(Error::validation(NOT_A_STRING_MSG)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A name must fit on exactly one store line.
impl TryFrom<&str> for NewUser {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::validation(MISSING_USER_MSG));
        }
        if value.contains(LINE_SEPARATOR) {
            return Err(Error::validation(MULTILINE_USER_MSG));
        }
        Ok(Self(value.to_owned()))
    }
}

impl std::fmt::Display for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
