//! API Gateway function that echoes a request's path, method and body back as JSON.

mod json;

use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info_span, warn};

const DEFAULT_PATH: &str = "N/A";
const DEFAULT_METHOD: &str = "N/A";
const DEFAULT_BODY: &str = "No body";

// Catch-all response when even the error body cannot be written.
const FALLBACK_FAULT_BODY: &str = r#"{"error": "internal error"}"#;

#[derive(Debug, thiserror::Error)]
enum HandlerError {
    #[error("event must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    // Unreachable for `Value` fields today; kept so a summary field of any
    // `Serialize` type still lands in the 500 path.
    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Field order is the key order of the serialized body.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct RequestSummary {
    path: Value,
    method: Value,
    body: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub body: String,
}

impl ResponseEnvelope {
    fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }

    fn fault(message: &str) -> Self {
        let body = json::to_text(&serde_json::json!({ "error": message }))
            .unwrap_or_else(|_| FALLBACK_FAULT_BODY.to_string());
        Self {
            status_code: 500,
            body,
        }
    }
}

/// Absent keys take their defaults; present values, `null` included, are copied as-is.
fn extract_fields(event: &Value) -> Result<RequestSummary, HandlerError> {
    let fields = event.as_object().ok_or(HandlerError::NotAnObject {
        found: json_type_name(event),
    })?;

    Ok(RequestSummary {
        path: get_or(fields, "path", DEFAULT_PATH),
        method: get_or(fields, "httpMethod", DEFAULT_METHOD),
        body: get_or(fields, "body", DEFAULT_BODY),
    })
}

fn get_or(fields: &Map<String, Value>, key: &str, default: &str) -> Value {
    fields
        .get(key)
        .cloned()
        .unwrap_or_else(|| Value::String(default.to_string()))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn summarize(event: &Value) -> Result<String, HandlerError> {
    let summary = extract_fields(event)?;
    Ok(json::to_text(&summary)?)
}

fn respond(result: Result<String, HandlerError>) -> ResponseEnvelope {
    match result {
        Ok(body) => {
            debug!(status_code = 200, "request summarized");
            ResponseEnvelope::ok(body)
        }
        Err(e) => {
            warn!(error = %e, "request handler fault");
            ResponseEnvelope::fault(&e.to_string())
        }
    }
}

/// Turn an event into a response envelope. Never fails: any fault becomes a 500.
pub fn handle_event(event: &Value) -> ResponseEnvelope {
    respond(summarize(event))
}

pub async fn function_handler(event: LambdaEvent<Value>) -> Result<ResponseEnvelope, Error> {
    let (payload, context) = event.into_parts();
    let span = info_span!("request", request_id = %context.request_id);

    Ok(span.in_scope(|| handle_event(&payload)))
}
