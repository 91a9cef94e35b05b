use serde::{Deserialize, Serialize};

/// `RefreshToken` command exchanges the currently held token for a fresh
/// one before it expires.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RefreshToken {
    /// The currently held token.
    pub token: String,
}
