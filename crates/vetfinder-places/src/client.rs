//! HTTP client for the Google Places API (New) text search.
//!
//! Wraps `reqwest` with Places-specific headers (API key, field mask), status
//! handling and per-entry deserialization. Upstream error bodies are reduced
//! to their `error.message` text and surfaced as
//! [`PlacesError::UnexpectedStatus`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::gateway::PlacesGateway;
use crate::types::{RawPlace, TextSearchRequest, TextSearchResponse};

const DEFAULT_BASE_URL: &str = "https://places.googleapis.com/";
const SEARCH_TEXT_PATH: &str = "v1/places:searchText";

/// Response fields requested from the provider.
pub const FIELD_MASK: &str = "places.displayName,places.formattedAddress,places.rating,\
places.userRatingCount,places.internationalPhoneNumber,places.location,places.websiteUri,\
places.currentOpeningHours,places.regularOpeningHours";

/// Longest upstream error text carried into an error message.
const MAX_ERROR_MESSAGE_LEN: usize = 300;

/// Client for the Places text search endpoint.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    search_url: Url,
    connect_timeout: Duration,
}

impl PlacesClient {
    /// Creates a client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, PlacesError> {
        Self::with_base_url(
            timeout_secs,
            connect_timeout_secs,
            user_agent,
            DEFAULT_BASE_URL,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// `timeout_secs` bounds a whole request; `connect_timeout_secs` bounds
    /// only connection setup.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let connect_timeout = Duration::from_secs(connect_timeout_secs);
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(connect_timeout)
            .user_agent(user_agent)
            .build()?;

        let search_url = Self::build_search_url(base_url)?;
        Ok(Self {
            client,
            search_url,
            connect_timeout,
        })
    }

    /// The fully resolved `places:searchText` URL.
    #[must_use]
    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Joins the search path onto `base_url`.
    ///
    /// The base is normalised to end with exactly one slash so that a base
    /// with a path prefix keeps it instead of having its last segment replaced.
    fn build_search_url(base_url: &str) -> Result<Url, PlacesError> {
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        Url::parse(&normalised)
            .and_then(|base| base.join(SEARCH_TEXT_PATH))
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })
    }

    /// Reduces an upstream error body to a short message.
    ///
    /// Google wraps errors as `{"error": {"message": "..."}}`; anything else is
    /// passed through truncated.
    fn upstream_error_message(body: &str) -> String {
        let from_json = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned)
            });

        let message = from_json.unwrap_or_else(|| body.trim().to_owned());
        if message.is_empty() {
            return "no response body".to_owned();
        }
        message.chars().take(MAX_ERROR_MESSAGE_LEN).collect()
    }

    /// Parses each place independently; entries that do not fit [`RawPlace`]
    /// are logged and skipped.
    fn parse_places(body: &str, context: &str) -> Result<Vec<RawPlace>, PlacesError> {
        let response: TextSearchResponse =
            serde_json::from_str(body).map_err(|e| PlacesError::Deserialize {
                context: context.to_owned(),
                source: e,
            })?;

        let places = response
            .places
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<RawPlace>(value) {
                Ok(place) => Some(place),
                Err(error) => {
                    tracing::debug!(index, %error, "skipping undecodable place entry");
                    None
                }
            })
            .collect();

        Ok(places)
    }
}

#[async_trait]
impl PlacesGateway for PlacesClient {
    async fn search_text(
        &self,
        api_key: &str,
        request: &TextSearchRequest,
    ) -> Result<Vec<RawPlace>, PlacesError> {
        let response = self
            .client
            .post(self.search_url.clone())
            .header("X-Goog-Api-Key", api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = Self::upstream_error_message(&body);
            tracing::warn!(
                status = status.as_u16(),
                error = %message,
                "Places text search returned an error status"
            );
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                message,
            });
        }

        let places = Self::parse_places(&body, &request.text_query)?;
        tracing::debug!(
            radius_meters = request.radius_meters(),
            count = places.len(),
            "Places text search complete"
        );
        Ok(places)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
