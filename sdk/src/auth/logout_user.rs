use serde::{Deserialize, Serialize};

/// `LogoutUser` command invalidates the held token server-side.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LogoutUser {
    /// The token to invalidate.
    pub token: String,
}
