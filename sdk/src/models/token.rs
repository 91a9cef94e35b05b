use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `AuthToken` is the authentication material returned by the backend's
/// auth endpoints: the serialized JWT and its expiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthToken {
    pub token: String,
    pub token_expiry: DateTime<Utc>,
}
