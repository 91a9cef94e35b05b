use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `RegisterUser` command creates a new account. Registration does not
/// establish a session; the caller logs in afterwards.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RegisterUser {
    pub email: String,
    /// Password in plain text; hashed by the backend.
    pub password: String,
    pub display_name: String,
    pub birthday: DateTime<Utc>,
    /// Base64 encoded profile picture.
    pub avatar: String,
}

impl Display for RegisterUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.email, self.display_name)
    }
}
