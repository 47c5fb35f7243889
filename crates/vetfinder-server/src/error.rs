use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::http::StatusCode;
use thiserror::Error;
use vetfinder_discovery::DiscoveryError;

/// Everything that can go wrong while serving one clinic search request.
///
/// The `Display` text is what callers see; no internal error value is
/// serialized directly.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The envelope is missing required fields or carries the wrong types.
    #[error("{0}")]
    MalformedInput(String),

    /// An axum extractor refused the request before any envelope was read.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("{0}")]
    Discovery(#[from] DiscoveryError),

    /// Anything else, such as a body that is not JSON at all.
    #[error("Server error: {0}")]
    Unexpected(String),
}

impl RequestError {
    /// HTTP status for this failure.
    ///
    /// Upstream error statuses are passed through when they are a valid
    /// 4xx/5xx code; any other upstream failure is a 500.
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::MalformedInput(_)
            | RequestError::Discovery(
                DiscoveryError::MissingCredential | DiscoveryError::MalformedInput(_),
            ) => StatusCode::BAD_REQUEST,
            RequestError::Discovery(err @ DiscoveryError::Upstream(_)) => err
                .upstream_status()
                .and_then(|code| StatusCode::from_u16(code).ok())
                .filter(|status| status.is_client_error() || status.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            RequestError::Rejected { status, .. } => *status,
            RequestError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryRejection> for RequestError {
    fn from(rejection: QueryRejection) -> Self {
        RequestError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<BytesRejection> for RequestError {
    fn from(rejection: BytesRejection) -> Self {
        RequestError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}
