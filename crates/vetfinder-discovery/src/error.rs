use thiserror::Error;
use vetfinder_places::PlacesError;

/// Failures of a discovery request.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// No Places credential was supplied for this call.
    #[error("Places API credential is not configured; set GOOGLE_API_KEY")]
    MissingCredential,

    /// The zip code or radius cannot form a valid query.
    #[error("invalid search input: {0}")]
    MalformedInput(String),

    /// The places provider failed or answered with an error status.
    #[error("failed to fetch vet clinics: {0}")]
    Upstream(#[from] PlacesError),
}

impl DiscoveryError {
    /// HTTP status reported by the places provider, if any.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            DiscoveryError::Upstream(source) => source.status(),
            DiscoveryError::MissingCredential | DiscoveryError::MalformedInput(_) => None,
        }
    }
}

/// Why a single raw place could not become a clinic record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("place is missing required field `{field}`")]
    MalformedRecord { field: &'static str },
}
