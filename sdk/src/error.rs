use thiserror::Error;

/// The error type shared by every client operation.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid configuration")]
    InvalidConfiguration,
    #[error("Cannot parse URL")]
    CannotParseUrl,
    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("Request error")]
    RequestError(#[from] reqwest::Error),
    #[error("HTTP response error: {0} {1}")]
    HttpResponseError(u16, String),
    #[error("Cannot access token storage")]
    CannotAccessTokenStorage(#[from] std::io::Error),
    #[error("Cannot serialize session")]
    CannotSerializeSession(#[from] serde_json::Error),
}

impl ClientError {
    /// Application error message reported by the backend, if the response
    /// body carried one. The backend renders errors as `{"error": "..."}`.
    pub fn api_message(&self) -> Option<String> {
        match self {
            ClientError::HttpResponseError(_, body) => {
                serde_json::from_str::<serde_json::Value>(body)
                    .ok()
                    .and_then(|body| {
                        body.get("error")
                            .and_then(|message| message.as_str())
                            .map(|message| message.to_string())
                    })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_extract_api_message_from_error_body() {
        let error =
            ClientError::HttpResponseError(404, "{\"error\": \"trip not found\"}".to_string());
        assert_eq!(error.api_message(), Some("trip not found".to_string()));
    }

    #[test]
    fn should_not_extract_api_message_from_malformed_body() {
        let error = ClientError::HttpResponseError(500, "Internal Server Error".to_string());
        assert_eq!(error.api_message(), None);
    }

    #[test]
    fn should_not_extract_api_message_from_body_without_error_field() {
        let error = ClientError::HttpResponseError(400, "{\"message\": \"nope\"}".to_string());
        assert_eq!(error.api_message(), None);
    }

    #[test]
    fn should_not_extract_api_message_from_other_errors() {
        assert_eq!(ClientError::Unauthenticated.api_message(), None);
    }
}
