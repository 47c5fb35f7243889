use thiserror::Error;

/// Errors returned by the Places API client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Places API answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from Places API: {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL could not be used to build a request URL.
    #[error("invalid Places base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl PlacesError {
    /// Upstream HTTP status, when the failure carried one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            PlacesError::UnexpectedStatus { status, .. } => Some(*status),
            PlacesError::Http(e) => e.status().map(|s| s.as_u16()),
            PlacesError::Deserialize { .. } | PlacesError::InvalidBaseUrl { .. } => None,
        }
    }
}
