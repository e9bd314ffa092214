//! API handlers

use std::collections::HashMap;

use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::Error;
use crate::handler;
use crate::types::{InvocationEvent, InvocationResponse};

/// Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Classify the `number` query parameter and answer with the plain-text body
pub async fn is_positive(Query(params): Query<HashMap<String, String>>) -> Response {
    let event = InvocationEvent::from_query(params);

    match handler::handle(&event) {
        Ok(response) => {
            let status = StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::OK);
            (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                response.body,
            )
                .into_response()
        }
        Err(err) => fault_response(err),
    }
}

/// Run the handler against a raw invocation event
pub async fn invoke(
    Json(event): Json<InvocationEvent>,
) -> Result<Json<InvocationResponse>, Response> {
    handler::handle(&event).map(Json).map_err(fault_response)
}

/// Faults surface the way the hosting platform reports an unhandled error:
/// a bare 500 with no detail about the cause.
fn fault_response(err: Error) -> Response {
    tracing::error!(error = %err, "Handler invocation failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
