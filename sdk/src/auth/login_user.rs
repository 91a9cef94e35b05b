use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `LoginUser` command is used to authenticate a user by username and
/// password. The backend answers with a fresh token and its expiry.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginUser {
    /// Username, the account's email address.
    pub username: String,
    /// Password in plain text; verified by the backend.
    pub password: String,
}

impl Display for LoginUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_be_serialized_as_json() {
        let command = LoginUser {
            username: "jane@example.com".to_string(),
            password: "secret".to_string(),
        };

        let payload = serde_json::to_value(&command).unwrap();
        assert_eq!(
            payload,
            json!({"username": "jane@example.com", "password": "secret"})
        );
    }

    #[test]
    fn should_not_display_the_password() {
        let command = LoginUser {
            username: "jane@example.com".to_string(),
            password: "secret".to_string(),
        };

        assert_eq!(command.to_string(), "jane@example.com");
    }
}
