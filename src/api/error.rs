//! Error taxonomy for API calls.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors surfaced by the API client.
///
/// Three classes cover everything a call can produce: the request never
/// completed (`Transport`), the service answered with its structured
/// error payload (`Server`), or the response had a shape this client
/// does not know (`Unexpected`).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or transport failure before a response was decoded.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service reported an error via its `{"error": "..."}` payload.
    #[error("server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// A response that matches no known shape.
    #[error("unexpected response: {0}")]
    Unexpected(String),
}

/// Body the service sends on failed requests.
#[derive(Debug, Deserialize)]
struct ServerErrorBody {
    error: String,
}

impl ApiError {
    /// Classify a non-success response body.
    pub(crate) fn from_error_body(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ServerErrorBody>(body) {
            Ok(parsed) => ApiError::Server {
                status: status.as_u16(),
                message: parsed.error,
            },
            Err(_) if body.is_empty() => {
                ApiError::Unexpected(format!("error response with empty body (HTTP {status})"))
            }
            Err(_) => ApiError::Unexpected(format!("error response (HTTP {status}): {body}")),
        }
    }

    /// The message a user should see, mirroring the web client's rules:
    /// server-reported message first, transport description otherwise.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Transport(source) => source.to_string(),
            ApiError::Unexpected(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_payload_becomes_server_error() {
        let err = ApiError::from_error_body(StatusCode::UNAUTHORIZED, r#"{"error": "not authorized"}"#);
        match err {
            ApiError::Server { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "not authorized");
            }
            other => panic!("expected Server, got {other:?}"),
        }
    }

    #[test]
    fn unknown_body_becomes_unexpected() {
        let err = ApiError::from_error_body(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert!(matches!(err, ApiError::Unexpected(_)));
    }

    #[test]
    fn user_message_prefers_server_text() {
        let err = ApiError::Server {
            status: 400,
            message: "name required".to_string(),
        };
        assert_eq!(err.user_message(), "name required");
    }
}
