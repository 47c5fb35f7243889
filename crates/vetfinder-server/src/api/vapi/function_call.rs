//! Function-call webhook: `POST /api/vapi/nearby-vets`.
//!
//! Request: `{"message": {"type": "function-call", "functionCall": {"parameters": {...}}}}`.
//! Response: `{"result": "...", "clinics": [...]}`, or `{"message": "..."}` on failure.

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

use crate::api::protocol::{respond_json, Invocation, Protocol, SearchParams};
use crate::api::AppState;
use crate::error::RequestError;

const FUNCTION_CALL_TYPE: &str = "function-call";
const SUCCESS_RESULT: &str = "Nearby open clinics found successfully.";

#[derive(Debug, Deserialize)]
pub(crate) struct FunctionCallEnvelope {
    #[serde(default)]
    message: FunctionCallMessage,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FunctionCallMessage {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    function_call: Option<FunctionCall>,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    #[serde(default)]
    parameters: Value,
}

#[derive(Debug, Serialize)]
struct FunctionCallResult {
    result: &'static str,
    clinics: Vec<ClinicRecord>,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

pub(crate) struct FunctionCallProtocol;

impl Protocol for FunctionCallProtocol {
    const NAME: &'static str = "vapi-function-call";

    type Envelope = FunctionCallEnvelope;

    fn extract(envelope: FunctionCallEnvelope) -> Invocation {
        let FunctionCallMessage {
            kind,
            function_call,
        } = envelope.message;

        let params = match (kind.as_deref(), function_call) {
            (Some(FUNCTION_CALL_TYPE), Some(call)) => SearchParams::from_value(&call.parameters),
            (kind, _) => Err(RequestError::MalformedInput(format!(
                "Unhandled message type: {}",
                kind.unwrap_or("undefined")
            ))),
        };

        Invocation {
            correlation_id: None,
            params,
        }
    }

    fn success(_: Option<Value>, _: &SearchParams, result: SearchResult) -> Response {
        (
            StatusCode::OK,
            Json(FunctionCallResult {
                result: SUCCESS_RESULT,
                clinics: result.records,
            }),
        )
            .into_response()
    }

    fn failure(_: Option<Value>, error: &RequestError) -> Response {
        (
            error.status(),
            Json(MessageBody {
                message: error.to_string(),
            }),
        )
            .into_response()
    }
}

pub(crate) async fn function_call(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    respond_json::<FunctionCallProtocol>(&state, body).await
}
