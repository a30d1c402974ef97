//! HTTP request handlers for the salary input API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::downstream::build_downstream_requests;
use crate::models::InputRecord;

use super::response::{ApiError, ApiErrorResponse, CORRELATION_ID_HEADER};
use super::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/validate", post(validate_handler))
        .with_state(state)
}

/// Handler for GET / endpoint.
async fn root_handler(State(state): State<AppState>) -> String {
    state.config().welcome_message().to_string()
}

/// Handler for GET /health endpoint.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for POST /validate endpoint.
///
/// Validates the submitted record. A valid record returns `200 OK` with the
/// enriched data; an invalid one returns `400 Bad Request` with every error
/// message. Bodies that are not JSON objects are rejected before validation.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing validation request");

    let value = match payload {
        Ok(Json(value)) => value,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::MissingJsonContentType(_) => {
                    warn!(correlation_id = %correlation_id, "Missing JSON content type");
                    ApiError::missing_content_type()
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return reject(correlation_id, error);
        }
    };

    let found = json_type_name(&value);
    let Some(record) = InputRecord::from_value(value) else {
        warn!(correlation_id = %correlation_id, found, "Request body is not a JSON object");
        return reject(correlation_id, ApiError::invalid_request(found));
    };

    let start_time = Instant::now();
    let result = state.engine().validate(&record);
    let duration = start_time.elapsed();

    let status = match result.validated() {
        Some(validated) => {
            for request in build_downstream_requests(state.config().downstream(), validated) {
                debug!(
                    correlation_id = %correlation_id,
                    service = request.service.key(),
                    url = %request.url,
                    "Prepared downstream request"
                );
            }
            info!(
                correlation_id = %correlation_id,
                duration_us = duration.as_micros(),
                "Validation passed"
            );
            StatusCode::OK
        }
        None => {
            warn!(
                correlation_id = %correlation_id,
                error_count = result.errors().len(),
                duration_us = duration.as_micros(),
                "Validation rejected input"
            );
            StatusCode::BAD_REQUEST
        }
    };

    (status, correlation_headers(correlation_id), Json(result)).into_response()
}

fn reject(correlation_id: Uuid, error: ApiError) -> Response {
    (
        correlation_headers(correlation_id),
        ApiErrorResponse::bad_request(error),
    )
        .into_response()
}

fn correlation_headers(correlation_id: Uuid) -> [(HeaderName, String); 2] {
    [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            HeaderName::from_static(CORRELATION_ID_HEADER),
            correlation_id.to_string(),
        ),
    ]
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
