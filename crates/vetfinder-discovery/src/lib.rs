//! Clinic discovery and ranking.
//!
//! [`discover`] is the single entry point every protocol adapter calls. It
//! builds a [`ClinicQuery`], runs the radius expansion search against a
//! [`PlacesGateway`], normalizes and deduplicates the raw places, ranks them
//! and picks a recommendation.
//!
//! [`ClinicQuery`]: vetfinder_core::ClinicQuery
//! [`PlacesGateway`]: vetfinder_places::PlacesGateway

pub mod discover;
pub mod error;
pub mod expansion;
pub mod normalize;
pub mod query;
pub mod rank;
pub mod recommend;

#[cfg(test)]
pub(crate) mod test_support;

pub use discover::discover;
pub use error::{DiscoveryError, NormalizeError};
pub use expansion::search_with_expansion;
pub use normalize::{dedupe_records, normalize_place, normalize_places};
pub use query::{build_query, DEFAULT_RADIUS_METERS, METERS_PER_MILE};
pub use rank::rank_records;
pub use recommend::recommend;
