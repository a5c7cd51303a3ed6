use axum::http::StatusCode;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Terminal outcomes of a single dispatch invocation. No retry path exists;
/// the caller treats notification failure as non-fatal to post creation.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Push provider credential is not configured")]
    MissingCredential,

    #[error("Push provider rejected the request with status {status}")]
    Provider { status: u16, body: JsonValue },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DispatchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DispatchError::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            DispatchError::Provider { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            DispatchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error payload surfaced to the caller. Provider bodies pass through
    /// verbatim for operator diagnosis.
    pub fn detail(&self) -> JsonValue {
        match self {
            DispatchError::Provider { body, .. } => body.clone(),
            other => JsonValue::String(other.to_string()),
        }
    }
}
