//! Structural checks on the raw request body.

use crate::Rejection;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde_json::{Map, Value};
use tracing::debug;

/// Accepts the body only if it parsed as JSON and its top level is an object.
///
/// Every failure collapses into [`Rejection::BadRequest`]. The specific reason
/// is logged at debug level and never returned to the caller.
///
/// # Examples
///
/// ```
/// use axum::Json;
/// use serde_json::json;
/// use storyteller_server::{Rejection, verify_request};
///
/// let body = verify_request(Ok(Json(json!({ "story": {} })))).unwrap();
/// assert!(body.contains_key("story"));
///
/// let rejected = verify_request(Ok(Json(json!([1, 2, 3])))).unwrap_err();
/// assert_eq!(rejected, Rejection::BadRequest);
/// ```
pub fn verify_request(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Map<String, Value>, Rejection> {
    match payload {
        Ok(Json(Value::Object(body))) => Ok(body),
        Ok(Json(other)) => {
            debug!(
                kind = json_kind(&other),
                "Request body is not a JSON object"
            );
            Err(Rejection::BadRequest)
        }
        Err(rejection) => {
            debug!(
                status = %rejection.status(),
                reason = %rejection.body_text(),
                "Request body failed to parse"
            );
            Err(Rejection::BadRequest)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
