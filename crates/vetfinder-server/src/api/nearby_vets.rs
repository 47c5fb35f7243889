//! Plain query-string endpoint: `GET /api/nearby-vets?zipCode=&radius=`.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use vetfinder_core::{ClinicRecord, SearchResult};

use crate::error::RequestError;

use super::protocol::{reject, respond, Invocation, Protocol, SearchParams};
use super::AppState;

/// Query parameters, kept as raw strings so bad values reach validation
/// instead of failing extraction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NearbyVetsQuery {
    zip_code: Option<String>,
    radius: Option<String>,
}

#[derive(Debug, Serialize)]
struct ClinicsBody {
    clinics: Vec<ClinicRecord>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

pub(crate) struct NearbyVets;

impl Protocol for NearbyVets {
    const NAME: &'static str = "nearby-vets";

    type Envelope = NearbyVetsQuery;

    fn extract(envelope: NearbyVetsQuery) -> Invocation {
        Invocation {
            correlation_id: None,
            params: SearchParams::from_query(
                envelope.zip_code.as_deref(),
                envelope.radius.as_deref(),
            ),
        }
    }

    fn success(_: Option<Value>, _: &SearchParams, result: SearchResult) -> Response {
        (
            StatusCode::OK,
            Json(ClinicsBody {
                clinics: result.records,
            }),
        )
            .into_response()
    }

    fn failure(_: Option<Value>, error: &RequestError) -> Response {
        (
            error.status(),
            Json(ErrorBody {
                error: error.to_string(),
            }),
        )
            .into_response()
    }
}

pub(super) async fn nearby_vets(
    State(state): State<AppState>,
    query: Result<Query<NearbyVetsQuery>, QueryRejection>,
) -> Response {
    match query {
        Ok(Query(query)) => respond::<NearbyVets>(&state, query).await,
        Err(rejection) => reject::<NearbyVets>(rejection),
    }
}
