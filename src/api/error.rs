use thiserror::Error;

/// Failure of a single cached or remote fetch.
///
/// Callers can branch on kind: `Api` is an error the service reported
/// inside a payload, `Transport` is a network/HTTP/decode failure, and
/// `NotFound` is an HTTP 404 for the requested resource.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("api error: {0}")]
    Api(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("not found: {0}")]
    NotFound(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl FetchError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            404 => FetchError::NotFound(truncated),
            _ => FetchError::Transport(format!("status {}: {}", status, truncated)),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn maps_404_to_not_found() {
        let err = FetchError::from_status(StatusCode::NOT_FOUND, "no such event");
        assert!(matches!(err, FetchError::NotFound(_)));
    }

    #[test]
    fn maps_server_error_to_transport() {
        let err = FetchError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        match err {
            FetchError::Transport(msg) => assert!(msg.contains("500")),
            other => panic!("expected Transport, got {:?}", other),
        }
    }

    #[test]
    fn truncates_long_bodies() {
        let body = "x".repeat(2000);
        let err = FetchError::from_status(StatusCode::BAD_GATEWAY, &body);
        match err {
            FetchError::Transport(msg) => {
                assert!(msg.contains("truncated"));
                assert!(msg.len() < 700);
            }
            other => panic!("expected Transport, got {:?}", other),
        }
    }
}
