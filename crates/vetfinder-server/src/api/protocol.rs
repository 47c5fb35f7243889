//! The shared request engine behind every inbound wire protocol.
//!
//! Each protocol only describes its envelope: how to pull a correlation id
//! and [`SearchParams`] out of it, and how to render a [`SearchResult`] or a
//! [`RequestError`] back into its response shape. Parsing, discovery and
//! logging live here once.
//!
//! Correlation ids are kept as raw JSON so they are echoed back exactly as
//! the caller sent them, whether string or number.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::response::Response;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use vetfinder_core::SearchResult;
use vetfinder_discovery::discover;

use crate::error::RequestError;

use super::AppState;

/// Zip code and radius lifted out of an inbound envelope.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchParams {
    pub zip_code: String,
    pub radius_miles: Option<f64>,
}

impl SearchParams {
    /// Reads `zipCode` and the optional `radius` from a JSON parameter object.
    ///
    /// `radius` may be a number or a numeric string; null, a missing key or
    /// an empty string all mean "use the default".
    pub(crate) fn from_object(params: &Map<String, Value>) -> Result<Self, RequestError> {
        let zip_code = match params.get("zipCode") {
            Some(Value::String(zip)) if !zip.trim().is_empty() => zip.trim().to_owned(),
            Some(Value::String(_)) | None | Some(Value::Null) => {
                return Err(missing_zip_code());
            }
            Some(other) => {
                return Err(RequestError::MalformedInput(format!(
                    "zipCode must be a string, got {}",
                    json_type(other)
                )));
            }
        };

        let radius_miles = match params.get("radius") {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => parse_radius(s)?,
            Some(other) => {
                return Err(RequestError::MalformedInput(format!(
                    "radius must be a number of miles, got {}",
                    json_type(other)
                )));
            }
        };

        Ok(Self {
            zip_code,
            radius_miles,
        })
    }

    /// Same as [`SearchParams::from_object`] for an arbitrary JSON value.
    pub(crate) fn from_value(params: &Value) -> Result<Self, RequestError> {
        match params {
            Value::Object(map) => Self::from_object(map),
            Value::Null => Err(missing_zip_code()),
            other => Err(RequestError::MalformedInput(format!(
                "parameters must be an object, got {}",
                json_type(other)
            ))),
        }
    }

    /// Builds parameters from URL query values.
    pub(crate) fn from_query(
        zip_code: Option<&str>,
        radius: Option<&str>,
    ) -> Result<Self, RequestError> {
        let zip_code = zip_code
            .map(str::trim)
            .filter(|zip| !zip.is_empty())
            .ok_or_else(missing_zip_code)?
            .to_owned();
        let radius_miles = radius.map(parse_radius).transpose()?.flatten();
        Ok(Self {
            zip_code,
            radius_miles,
        })
    }
}

pub(crate) fn missing_zip_code() -> RequestError {
    RequestError::MalformedInput(
        "USA zip code of the caller is required. Please specify zipCode parameter.".to_owned(),
    )
}

fn parse_radius(raw: &str) -> Result<Option<f64>, RequestError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>().map(Some).map_err(|_| {
        RequestError::MalformedInput(format!("radius must be a number of miles, got '{raw}'"))
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// What a protocol extracted from its envelope.
pub(crate) struct Invocation {
    pub correlation_id: Option<Value>,
    pub params: Result<SearchParams, RequestError>,
}

/// One inbound wire protocol.
pub(crate) trait Protocol {
    /// Name used in log events.
    const NAME: &'static str;

    type Envelope: DeserializeOwned;

    /// Best-effort correlation id from a body that may not fit `Envelope`.
    fn correlation_hint(_raw: &Value) -> Option<Value> {
        None
    }

    fn extract(envelope: Self::Envelope) -> Invocation;

    fn success(correlation_id: Option<Value>, params: &SearchParams, result: SearchResult)
        -> Response;

    fn failure(correlation_id: Option<Value>, error: &RequestError) -> Response;
}

/// Runs discovery for an already-decoded envelope and renders the outcome.
pub(crate) async fn respond<P: Protocol>(state: &AppState, envelope: P::Envelope) -> Response {
    let Invocation {
        correlation_id,
        params,
    } = P::extract(envelope);

    let params = match params {
        Ok(params) => params,
        Err(error) => return fail::<P>(correlation_id, &error),
    };

    let outcome = discover(
        state.gateway.as_ref(),
        state.places_api_key.as_deref(),
        &params.zip_code,
        params.radius_miles,
    )
    .await;

    match outcome {
        Ok(result) => {
            let label = correlation_label(correlation_id.as_ref());
            tracing::info!(
                protocol = P::NAME,
                correlation_id = label.as_deref(),
                clinics = result.records.len(),
                "clinic search served"
            );
            P::success(correlation_id, &params, result)
        }
        Err(error) => fail::<P>(correlation_id, &RequestError::from(error)),
    }
}

/// Decodes a raw JSON body into `P::Envelope`, then behaves like [`respond`].
///
/// A body axum could not read keeps the rejection's status. A body that is
/// not JSON is an unexpected failure (500); JSON of the wrong shape is
/// malformed input (400) and keeps any correlation id it carried.
pub(crate) async fn respond_json<P: Protocol>(
    state: &AppState,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return reject::<P>(rejection),
    };

    let raw: Value = match serde_json::from_slice(&body) {
        Ok(raw) => raw,
        Err(e) => {
            return fail::<P>(
                None,
                &RequestError::Unexpected(format!("request body is not valid JSON: {e}")),
            );
        }
    };

    let correlation_id = P::correlation_hint(&raw);
    match serde_json::from_value::<P::Envelope>(raw) {
        Ok(envelope) => respond::<P>(state, envelope).await,
        Err(e) => fail::<P>(
            correlation_id,
            &RequestError::MalformedInput(format!("unexpected request shape: {e}")),
        ),
    }
}

/// Renders an extractor rejection in the protocol's own failure shape.
pub(crate) fn reject<P: Protocol>(rejection: impl Into<RequestError>) -> Response {
    fail::<P>(None, &rejection.into())
}

fn fail<P: Protocol>(correlation_id: Option<Value>, error: &RequestError) -> Response {
    let status = error.status();
    let label = correlation_label(correlation_id.as_ref());
    if status.is_server_error() {
        tracing::error!(
            protocol = P::NAME,
            correlation_id = label.as_deref(),
            status = status.as_u16(),
            error = %error,
            "clinic search failed"
        );
    } else {
        tracing::warn!(
            protocol = P::NAME,
            correlation_id = label.as_deref(),
            status = status.as_u16(),
            error = %error,
            "clinic search rejected"
        );
    }
    P::failure(correlation_id, error)
}

fn correlation_label(id: Option<&Value>) -> Option<String> {
    id.map(|id| match id {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}

/// Spoken-style summary of a result, used by the voice protocols.
pub(crate) fn describe(zip_code: &str, result: &SearchResult) -> String {
    let Some(best) = result.recommended.as_ref() else {
        return format!("No open emergency vet clinics were found near {zip_code}.");
    };

    let count = result.records.len();
    let noun = if count == 1 { "clinic" } else { "clinics" };
    let rating = best
        .rating
        .map(|rating| format!(", rated {rating:.1}"))
        .unwrap_or_default();
    let phone = best
        .phone
        .as_deref()
        .map(|phone| format!(", phone {phone}"))
        .unwrap_or_default();
    format!(
        "Found {count} open emergency vet {noun} near {zip_code}. Recommended: {} at {}{rating}{phone}.",
        best.name, best.address
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vetfinder_core::ClinicRecord;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object")
    }

    #[test]
    fn from_object_reads_zip_and_numeric_radius() {
        let params = SearchParams::from_object(&object(json!({"zipCode": "98102", "radius": 10})))
            .expect("valid params");
        assert_eq!(params.zip_code, "98102");
        assert_eq!(params.radius_miles, Some(10.0));
    }

    #[test]
    fn from_object_accepts_string_radius_and_blank_radius() {
        let params =
            SearchParams::from_object(&object(json!({"zipCode": "98102", "radius": "2.5"})))
                .unwrap();
        assert_eq!(params.radius_miles, Some(2.5));
        let params =
            SearchParams::from_object(&object(json!({"zipCode": "98102", "radius": ""}))).unwrap();
        assert_eq!(params.radius_miles, None);
    }

    #[test]
    fn from_object_rejects_missing_or_non_string_zip() {
        for params in [
            json!({}),
            json!({"zipCode": null}),
            json!({"zipCode": "  "}),
            json!({"zipCode": 98102}),
            json!({"zipCode": ["98102"]}),
        ] {
            assert!(
                matches!(
                    SearchParams::from_object(&object(params.clone())),
                    Err(RequestError::MalformedInput(_))
                ),
                "{params} should be rejected"
            );
        }
    }

    #[test]
    fn from_object_rejects_unparseable_radius() {
        let result = SearchParams::from_object(&object(json!({"zipCode": "1", "radius": "far"})));
        assert!(matches!(result, Err(RequestError::MalformedInput(_))));
        let result = SearchParams::from_object(&object(json!({"zipCode": "1", "radius": true})));
        assert!(matches!(result, Err(RequestError::MalformedInput(_))));
    }

    #[test]
    fn from_value_requires_an_object() {
        assert!(SearchParams::from_value(&json!("98102")).is_err());
        assert!(SearchParams::from_value(&Value::Null).is_err());
        assert!(SearchParams::from_value(&json!({"zipCode": "98102"})).is_ok());
    }

    #[test]
    fn from_query_handles_optional_radius() {
        let params = SearchParams::from_query(Some("98102"), None).unwrap();
        assert_eq!(params.radius_miles, None);
        let params = SearchParams::from_query(Some("98102"), Some("7")).unwrap();
        assert_eq!(params.radius_miles, Some(7.0));
        assert!(SearchParams::from_query(None, Some("7")).is_err());
        assert!(SearchParams::from_query(Some(""), None).is_err());
    }

    #[test]
    fn describe_mentions_recommendation() {
        let best = ClinicRecord {
            name: "Pet ER".to_owned(),
            address: "1 Main St".to_owned(),
            rating: Some(4.6),
            rating_count: None,
            phone: Some("+1 206-555-0100".to_owned()),
            location: None,
            website: None,
            hours: None,
        };
        let result = SearchResult {
            records: vec![best.clone()],
            recommended: Some(best),
        };
        assert_eq!(
            describe("98102", &result),
            "Found 1 open emergency vet clinic near 98102. Recommended: Pet ER at 1 Main St, rated 4.6, phone +1 206-555-0100."
        );
    }

    #[test]
    fn describe_handles_empty_result() {
        let result = SearchResult {
            records: vec![],
            recommended: None,
        };
        assert_eq!(
            describe("98102", &result),
            "No open emergency vet clinics were found near 98102."
        );
    }
}
