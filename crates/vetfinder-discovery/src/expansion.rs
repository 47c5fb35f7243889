//! One-shot radius expansion for sparse search results.
//!
//! The first search runs at the query radius. If it returns fewer than
//! [`MIN_INITIAL_RESULTS`] places, a single second search runs at
//! [`EXPANSION_FACTOR`] times the radius and its places are appended after
//! the first ones. There is never a third call, and provider failures are not
//! retried.

use vetfinder_core::ClinicQuery;
use vetfinder_places::{PlacesError, PlacesGateway, RawPlace, TextSearchRequest};

pub const MIN_INITIAL_RESULTS: usize = 2;
pub const EXPANSION_FACTOR: f64 = 2.0;

/// Runs the initial search and, when it comes back sparse, the expanded one.
///
/// # Errors
///
/// Propagates the first [`PlacesError`] from either call.
pub async fn search_with_expansion<G>(
    gateway: &G,
    api_key: &str,
    query: &ClinicQuery,
) -> Result<Vec<RawPlace>, PlacesError>
where
    G: PlacesGateway + ?Sized,
{
    let initial_request = search_request(query, query.radius_meters);
    let mut places = gateway.search_text(api_key, &initial_request).await?;

    if places.len() >= MIN_INITIAL_RESULTS {
        tracing::debug!(
            radius_meters = query.radius_meters,
            count = places.len(),
            "initial search sufficient; skipping expansion"
        );
        return Ok(places);
    }

    let expanded_radius = query.radius_meters * EXPANSION_FACTOR;
    tracing::debug!(
        radius_meters = query.radius_meters,
        expanded_radius_meters = expanded_radius,
        count = places.len(),
        "initial search sparse; expanding radius"
    );

    let expanded_request = search_request(query, expanded_radius);
    let expanded = gateway.search_text(api_key, &expanded_request).await?;
    tracing::debug!(count = expanded.len(), "expanded search complete");

    places.extend(expanded);
    Ok(places)
}

fn search_request(query: &ClinicQuery, radius_meters: f64) -> TextSearchRequest {
    TextSearchRequest::new(query.text_query.clone(), query.open_now_only, radius_meters)
}
