//! The narrow contract the discovery engine uses to reach a places provider.

use async_trait::async_trait;

use crate::error::PlacesError;
use crate::types::{RawPlace, TextSearchRequest};

/// A text-search backend for places.
///
/// The credential is passed on every call rather than held by the
/// implementation, so a missing key is detected per request and tests can
/// swap in a stub without touching the process environment.
#[async_trait]
pub trait PlacesGateway: Send + Sync {
    /// Runs one text search and returns the places in provider order.
    ///
    /// # Errors
    ///
    /// Returns a [`PlacesError`] on transport failure, a non-2xx status, or a
    /// response body that is not a valid search response.
    async fn search_text(
        &self,
        api_key: &str,
        request: &TextSearchRequest,
    ) -> Result<Vec<RawPlace>, PlacesError>;
}
