use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `UserClaims` is the identity carried in the payload segment of the
/// authentication token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserClaims {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

#[derive(Deserialize)]
struct TokenClaims {
    user: UserClaims,
}

impl UserClaims {
    /// Decodes the identity claims from the middle segment of `token`
    /// without verifying the signature; the backend already did. Malformed
    /// or absent tokens yield `None`, never an error.
    pub fn from_token(token: &str) -> Option<Self> {
        let payload = token.split('.').nth(1)?;
        let payload = URL_SAFE_NO_PAD.decode(payload).ok()?;
        let claims: TokenClaims = serde_json::from_slice(&payload).ok()?;
        Some(claims.user)
    }
}
