//! Canonical clinic domain types shared by the discovery engine and its callers.

use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Squared distance of the point from `(0, 0)`.
    ///
    /// This is the proximity proxy used to break rating ties; it is not a
    /// distance from the caller.
    #[must_use]
    pub fn squared_magnitude(&self) -> f64 {
        self.lat * self.lat + self.lng * self.lng
    }
}

/// A validated search request for open clinics near a postal code.
///
/// Built once per inbound request by the discovery query builder.
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicQuery {
    pub zip_code: String,
    /// Natural-language phrase sent to the places provider.
    pub text_query: String,
    /// Always strictly positive.
    pub radius_meters: f64,
    pub open_now_only: bool,
}

/// A clinic in canonical shape.
///
/// Optional fields stay `None` when the upstream omitted them; they are
/// skipped on serialization rather than written as zero or empty values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicRecord {
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
}

impl ClinicRecord {
    /// Rating used for comparisons: an absent rating counts as `0`.
    #[must_use]
    pub fn effective_rating(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Whether two records describe the same clinic (same name and address).
    #[must_use]
    pub fn same_clinic(&self, other: &ClinicRecord) -> bool {
        self.name == other.name && self.address == other.address
    }
}

/// Ranked clinics plus the single recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub records: Vec<ClinicRecord>,
    /// `None` exactly when `records` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended: Option<ClinicRecord>,
}

#[cfg(test)]
#[path = "clinic_test.rs"]
mod tests;
