//! User registration endpoint.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use user_store::UserStore;

use crate::error::{ServerError, ServerResult};
use crate::services::registration::{self, RegisterRequest, Validation};
use crate::state::AppState;

/// Body returned on successful registration.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Decodes a registration body.
///
/// A body without a JSON content type, an empty body, and a JSON array all
/// decode to the empty request, so they are rejected by validation. Any
/// other non-object value or undecodable JSON is a malformed body.
pub fn decode_body(headers: &HeaderMap, body: &[u8]) -> ServerResult<RegisterRequest> {
    if !is_json_content_type(headers) || body.is_empty() {
        return Ok(RegisterRequest::default());
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| ServerError::MalformedBody(e.to_string()))?;

    match value {
        Value::Object(_) => {
            serde_json::from_value(value).map_err(|e| ServerError::MalformedBody(e.to_string()))
        }
        Value::Array(_) => Ok(RegisterRequest::default()),
        other => Err(ServerError::MalformedBody(format!(
            "expected a JSON object or array, got {other}"
        ))),
    }
}

/// Registers a new user.
pub async fn register_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    headers: HeaderMap,
    body: Bytes,
) -> ServerResult<(StatusCode, Json<RegisterResponse>)> {
    let request = decode_body(&headers, &body)?;

    match registration::register(&state.store, request).await? {
        Validation::Accepted(_) => Ok((
            StatusCode::CREATED,
            Json(RegisterResponse {
                message: "User registered successfully".to_string(),
            }),
        )),
        Validation::Rejected(reason) => Err(reason.into()),
    }
}
