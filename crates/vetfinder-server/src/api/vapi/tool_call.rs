//! Correlated tool-call webhook: `POST /api/vapi/tool-call`.
//!
//! Request: `{"toolCallId": "...", "parameters": {"zipCode": "...", "radius": 5}}`.
//! Every response echoes `toolCallId` unchanged next to a `message`;
//! successful ones also carry the ranked `clinics`.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use vetfinder_core::{ClinicRecord, SearchResult};

use crate::api::protocol::{describe, respond_json, Invocation, Protocol, SearchParams};
use crate::api::AppState;
use crate::error::RequestError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ToolCallEnvelope {
    #[serde(default)]
    tool_call_id: Option<Value>,
    #[serde(default)]
    parameters: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolCallResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<Value>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    clinics: Option<Vec<ClinicRecord>>,
}

pub(crate) struct ToolCallProtocol;

impl Protocol for ToolCallProtocol {
    const NAME: &'static str = "vapi-tool-call";

    type Envelope = ToolCallEnvelope;

    fn correlation_hint(raw: &Value) -> Option<Value> {
        raw.get("toolCallId").filter(|id| !id.is_null()).cloned()
    }

    fn extract(envelope: ToolCallEnvelope) -> Invocation {
        Invocation {
            correlation_id: envelope.tool_call_id,
            params: SearchParams::from_value(&envelope.parameters),
        }
    }

    fn success(
        correlation_id: Option<Value>,
        params: &SearchParams,
        result: SearchResult,
    ) -> Response {
        let message = describe(&params.zip_code, &result);
        (
            StatusCode::OK,
            Json(ToolCallResponse {
                tool_call_id: correlation_id,
                message,
                clinics: Some(result.records),
            }),
        )
            .into_response()
    }

    fn failure(correlation_id: Option<Value>, error: &RequestError) -> Response {
        (
            error.status(),
            Json(ToolCallResponse {
                tool_call_id: correlation_id,
                message: error.to_string(),
                clinics: None,
            }),
        )
            .into_response()
    }
}

pub(crate) async fn tool_call(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    respond_json::<ToolCallProtocol>(&state, body).await
}
