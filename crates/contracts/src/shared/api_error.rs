use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure talking to the record backend or the image host.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS...).
    #[error("Network error: {0}")]
    Network(String),
    /// Backend answered with a non-2xx status or `success: false`.
    #[error("{0}")]
    Backend(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Common `{ success, error? }` envelope of every backend reply.
pub trait BackendReply {
    fn success(&self) -> bool;
    fn error_message(&self) -> Option<&str>;
}

/// Turn a decoded reply into `Ok(reply)` or `ApiError::Backend`.
///
/// `fallback` is used when the backend reports failure without a message.
pub fn check_reply<R: BackendReply>(reply: R, fallback: &str) -> Result<R, ApiError> {
    if reply.success() {
        return Ok(reply);
    }
    let message = reply
        .error_message()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(fallback)
        .to_string();
    Err(ApiError::Backend(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reply {
        success: bool,
        error: Option<String>,
    }

    impl BackendReply for Reply {
        fn success(&self) -> bool {
            self.success
        }
        fn error_message(&self) -> Option<&str> {
            self.error.as_deref()
        }
    }

    #[test]
    fn failure_uses_backend_message_or_fallback() {
        let err = check_reply(
            Reply {
                success: false,
                error: Some("duplicate email".into()),
            },
            "Server error",
        )
        .err();
        assert_eq!(err, Some(ApiError::Backend("duplicate email".into())));

        let err = check_reply(
            Reply {
                success: false,
                error: Some("  ".into()),
            },
            "Server error",
        )
        .err();
        assert_eq!(err, Some(ApiError::Backend("Server error".into())));

        assert!(check_reply(
            Reply {
                success: true,
                error: None
            },
            "x"
        )
        .is_ok());
    }
}
