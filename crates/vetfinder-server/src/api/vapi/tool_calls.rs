//! Tool-call array webhook: `POST /api/vapi/tool-calls`.
//!
//! Request: `{"message": {"toolCalls": [{"id": "...", "function": {"arguments": ...}}]}}`.
//! Only the first tool call is served. `arguments` arrives either as an
//! object or as a JSON-encoded string; see [`ToolArguments`].
//!
//! The response is an array of `{"toolCallId", "result": {"message"}}`. The
//! integration reads only that message, so the clinic list is flattened into
//! it as serialized JSON text.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use vetfinder_core::SearchResult;

use crate::api::protocol::{
    describe, missing_zip_code, respond_json, Invocation, Protocol, SearchParams,
};
use crate::api::AppState;
use crate::error::RequestError;

#[derive(Debug, Deserialize)]
pub(crate) struct ToolCallsEnvelope {
    #[serde(default)]
    message: ToolCallsMessage,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToolCallsMessage {
    #[serde(default)]
    tool_calls: Vec<ToolCall>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    function: Option<ToolFunction>,
}

#[derive(Debug, Deserialize)]
struct ToolFunction {
    #[serde(default)]
    arguments: Option<ToolArguments>,
}

/// Tool arguments as sent on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum ToolArguments {
    /// A JSON object serialized into a string.
    Encoded(String),
    Raw(Map<String, Value>),
}

impl ToolArguments {
    /// Normalizes both forms to the decoded object.
    pub(crate) fn into_object(self) -> Result<Map<String, Value>, RequestError> {
        match self {
            ToolArguments::Raw(map) => Ok(map),
            ToolArguments::Encoded(text) => serde_json::from_str(&text).map_err(|e| {
                RequestError::MalformedInput(format!(
                    "tool call arguments are not a JSON object: {e}"
                ))
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolCallResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<Value>,
    result: ResultMessage,
}

#[derive(Debug, Serialize)]
struct ResultMessage {
    message: String,
}

pub(crate) struct ToolCallsProtocol;

impl ToolCallsProtocol {
    fn render(status: StatusCode, correlation_id: Option<Value>, message: String) -> Response {
        (
            status,
            Json(vec![ToolCallResult {
                tool_call_id: correlation_id,
                result: ResultMessage { message },
            }]),
        )
            .into_response()
    }
}

impl Protocol for ToolCallsProtocol {
    const NAME: &'static str = "vapi-tool-calls";

    type Envelope = ToolCallsEnvelope;

    fn correlation_hint(raw: &Value) -> Option<Value> {
        raw.pointer("/message/toolCalls/0/id")
            .filter(|id| !id.is_null())
            .cloned()
    }

    fn extract(envelope: ToolCallsEnvelope) -> Invocation {
        let Some(call) = envelope.message.tool_calls.into_iter().next() else {
            return Invocation {
                correlation_id: None,
                params: Err(RequestError::MalformedInput(
                    "message.toolCalls must contain at least one tool call".to_owned(),
                )),
            };
        };

        let params = call
            .function
            .and_then(|function| function.arguments)
            .ok_or_else(missing_zip_code)
            .and_then(ToolArguments::into_object)
            .and_then(|arguments| SearchParams::from_object(&arguments));

        Invocation {
            correlation_id: call.id,
            params,
        }
    }

    fn success(
        correlation_id: Option<Value>,
        params: &SearchParams,
        result: SearchResult,
    ) -> Response {
        let summary = describe(&params.zip_code, &result);
        let message = match serde_json::to_string(&result.records) {
            Ok(clinics) => format!("{summary} Clinics: {clinics}"),
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize clinics for tool-call message");
                summary
            }
        };
        Self::render(StatusCode::OK, correlation_id, message)
    }

    fn failure(correlation_id: Option<Value>, error: &RequestError) -> Response {
        Self::render(error.status(), correlation_id, error.to_string())
    }
}

pub(crate) async fn tool_calls(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    respond_json::<ToolCallsProtocol>(&state, body).await
}
