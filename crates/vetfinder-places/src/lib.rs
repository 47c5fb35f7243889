pub mod client;
pub mod error;
pub mod gateway;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use gateway::PlacesGateway;
pub use types::{
    CircleBias, LatLng, LocalizedText, LocationBias, OpeningHours, RawPlace, TextSearchRequest,
};
