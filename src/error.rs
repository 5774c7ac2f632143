// src/error.rs
use serde::Deserialize;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid response from server")]
    InvalidResponse,

    #[error("unauthorized, please sign in again")]
    Unauthorized,

    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("{detail}")]
    Server { status: u16, detail: String },

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl ApiError {
    /// HTTP status carried by the error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Http(code) => Some(*code),
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True when the request never reached the server.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Map a non-2xx status and its raw body to the client error set.
///
/// The server error body takes precedence over the bare status code; 401
/// always maps to `Unauthorized` so callers can treat it as a signed-out
/// session.
pub fn error_for_status(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) => ApiError::Server {
            status,
            detail: err.detail,
        },
        Err(_) => ApiError::Http(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_wins_over_detail() {
        let err = error_for_status(401, r#"{"detail": "token expired"}"#);
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[test]
    fn test_detail_body_is_passed_through() {
        let err = error_for_status(409, r#"{"detail": "Sync already in progress"}"#);
        match err {
            ApiError::Server { status, detail } => {
                assert_eq!(status, 409);
                assert_eq!(detail, "Sync already in progress");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_opaque_body_maps_to_status_code() {
        let err = error_for_status(502, "<html>bad gateway</html>");
        assert!(matches!(err, ApiError::Http(502)));
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_not_found_from_either_shape() {
        assert!(error_for_status(404, "not json").is_not_found());
        assert!(error_for_status(404, r#"{"detail": "Application not found"}"#).is_not_found());
    }
}
