//! Google Places API (New) request and response types.
//!
//! Only the subset used by `places:searchText` is modelled. Every response
//! field is optional: the provider omits fields freely and the field mask
//! decides which ones are present at all.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Body of a `places:searchText` request.
///
/// The bias circle carries no center; the zip code in `text_query` anchors
/// the search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSearchRequest {
    pub text_query: String,
    pub open_now: bool,
    pub location_bias: LocationBias,
}

impl TextSearchRequest {
    /// Builds a request biased to a circle of `radius_meters`.
    #[must_use]
    pub fn new(text_query: impl Into<String>, open_now: bool, radius_meters: f64) -> Self {
        Self {
            text_query: text_query.into(),
            open_now,
            location_bias: LocationBias {
                circle: CircleBias {
                    radius: radius_meters,
                },
            },
        }
    }

    /// Radius of the location bias circle, in meters.
    #[must_use]
    pub fn radius_meters(&self) -> f64 {
        self.location_bias.circle.radius
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationBias {
    pub circle: CircleBias,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleBias {
    pub radius: f64,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Top-level `places:searchText` response.
///
/// The API drops the `places` key entirely when nothing matched. Entries are
/// kept as raw JSON so one malformed place cannot fail the whole page.
#[derive(Debug, Deserialize)]
pub(crate) struct TextSearchResponse {
    #[serde(default)]
    pub places: Vec<serde_json::Value>,
}

/// A place record exactly as the provider returned it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlace {
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_rating_count: Option<u64>,
    #[serde(default)]
    pub international_phone_number: Option<String>,
    #[serde(default)]
    pub location: Option<LatLng>,
    #[serde(default)]
    pub website_uri: Option<String>,
    #[serde(default)]
    pub current_opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub regular_opening_hours: Option<OpeningHours>,
}

impl RawPlace {
    /// The display name text, if the provider sent one.
    #[must_use]
    pub fn display_name_text(&self) -> Option<&str> {
        self.display_name
            .as_ref()
            .and_then(|name| name.text.as_deref())
    }

    /// Current opening hours, falling back to the regular schedule.
    #[must_use]
    pub fn opening_hours(&self) -> Option<&OpeningHours> {
        self.current_opening_hours
            .as_ref()
            .filter(|hours| !hours.weekday_descriptions.is_empty())
            .or(self.regular_opening_hours.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    #[serde(default)]
    pub text: Option<String>,
}

/// Coordinates as sent by the provider. Older payloads use `lat`/`lng`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng")]
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    #[serde(default)]
    pub weekday_descriptions: Vec<String>,
}
