use vetfinder_core::SearchResult;
use vetfinder_places::PlacesGateway;

use crate::error::DiscoveryError;
use crate::expansion::search_with_expansion;
use crate::normalize::{dedupe_records, normalize_places};
use crate::query::build_query;
use crate::rank::rank_records;
use crate::recommend::recommend;

/// Finds open emergency clinics near `zip_code`, ranked, with a recommendation.
///
/// `api_key` is the Places credential for this call. It is checked before
/// anything else, so a missing key never reaches the gateway.
///
/// # Errors
///
/// - [`DiscoveryError::MissingCredential`] if `api_key` is `None` or blank.
/// - [`DiscoveryError::MalformedInput`] if the zip code or radius is invalid.
/// - [`DiscoveryError::Upstream`] if either gateway call fails.
pub async fn discover<G>(
    gateway: &G,
    api_key: Option<&str>,
    zip_code: &str,
    radius_miles: Option<f64>,
) -> Result<SearchResult, DiscoveryError>
where
    G: PlacesGateway + ?Sized,
{
    let api_key = api_key
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or(DiscoveryError::MissingCredential)?;

    let query = build_query(zip_code, radius_miles)?;
    let places = search_with_expansion(gateway, api_key, &query).await?;
    let fetched = places.len();

    let records = rank_records(dedupe_records(normalize_places(places)));
    let recommended = recommend(&records).cloned();

    tracing::info!(
        zip_code = %query.zip_code,
        radius_meters = query.radius_meters,
        fetched,
        returned = records.len(),
        recommended = recommended.as_ref().map(|r| r.name.as_str()),
        "clinic discovery complete"
    );

    Ok(SearchResult {
        records,
        recommended,
    })
}
