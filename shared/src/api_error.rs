use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failure of a single backend call.
///
/// `Status` keeps the raw HTTP status so callers can branch on the handful
/// of codes the backend uses to mean something specific (400, 404, 429).
/// A 401 never surfaces as `Status`; it is mapped to `Unauthorized` after
/// the client has dropped the session token.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("backend returned status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid request payload: {0}")]
    Payload(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend-supplied message when one exists, otherwise the fallback.
    pub fn human_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
