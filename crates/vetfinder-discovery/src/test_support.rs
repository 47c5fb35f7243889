//! Call-recording gateway stub shared by the engine's unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use vetfinder_core::{ClinicRecord, GeoPoint};
use vetfinder_places::{
    LatLng, LocalizedText, PlacesError, PlacesGateway, RawPlace, TextSearchRequest,
};

/// Replays scripted responses in order and records every request it sees.
pub(crate) struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<Vec<RawPlace>, PlacesError>>>,
    pub(crate) requests: Mutex<Vec<(String, TextSearchRequest)>>,
}

impl ScriptedGateway {
    pub(crate) fn new(responses: Vec<Result<Vec<RawPlace>, PlacesError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn radii(&self) -> Vec<f64> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, request)| request.radius_meters())
            .collect()
    }
}

#[async_trait]
impl PlacesGateway for ScriptedGateway {
    async fn search_text(
        &self,
        api_key: &str,
        request: &TextSearchRequest,
    ) -> Result<Vec<RawPlace>, PlacesError> {
        self.requests
            .lock()
            .unwrap()
            .push((api_key.to_owned(), request.clone()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub(crate) fn place(name: &str, address: &str, rating: Option<f64>) -> RawPlace {
    RawPlace {
        display_name: Some(LocalizedText {
            text: Some(name.to_owned()),
        }),
        formatted_address: Some(address.to_owned()),
        rating,
        ..RawPlace::default()
    }
}

pub(crate) fn place_at(name: &str, rating: Option<f64>, lat: f64, lng: f64) -> RawPlace {
    RawPlace {
        location: Some(LatLng {
            latitude: lat,
            longitude: lng,
        }),
        ..place(name, &format!("{name} address"), rating)
    }
}

pub(crate) fn record(name: &str, rating: Option<f64>) -> ClinicRecord {
    ClinicRecord {
        name: name.to_owned(),
        address: format!("{name} address"),
        rating,
        rating_count: None,
        phone: None,
        location: None,
        website: None,
        hours: None,
    }
}

pub(crate) fn record_at(name: &str, rating: Option<f64>, lat: f64, lng: f64) -> ClinicRecord {
    ClinicRecord {
        location: Some(GeoPoint { lat, lng }),
        ..record(name, rating)
    }
}

pub(crate) fn names(records: &[ClinicRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}
