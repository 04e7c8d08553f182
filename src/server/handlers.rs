use super::error::ApiError;
use crate::api::{self, Components};
use crate::error::HandlerError;
use crate::tools::batch::{BatchReport, SitemapReport};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, warn};

/// `POST /api/fetch-og-images` with `{ domain?, input? }`.
pub async fn fetch_og_images(
    State(components): State<Arc<Components>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SitemapReport>, ApiError> {
    let body = json_body(body)?;
    let input = api::domain_input(&body).unwrap_or_default();

    match api::resolve_and_extract(&components, input).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => Err(log_failure(e)),
    }
}

/// `POST /api/process-unprocessed` with `{ urls, limit? }`.
pub async fn process_unprocessed(
    State(components): State<Arc<Components>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BatchReport>, ApiError> {
    let body = json_body(body)?;
    let urls = api::sanitize_urls(body.get("urls"));
    let limit = api::batch_limit(body.get("limit"), &components.settings);

    match api::extract_given_list(&components, urls, limit).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => Err(log_failure(e)),
    }
}

/// Empty 200 for `OPTIONS`.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// Unmatched paths: `OPTIONS` still succeeds, everything else is a JSON 404.
pub async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        ApiError::not_found().into_response()
    }
}

/// A request without a JSON content type is treated as an empty body; malformed JSON is a 400.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(Value::Null),
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "rejected request body");
            Err(ApiError::bad_request(rejection.body_text()))
        }
    }
}

fn log_failure(err: HandlerError) -> ApiError {
    match &err {
        HandlerError::Input(message) => warn!(error = %message, "invalid request"),
        HandlerError::Upstream(message) => error!(error = %message, "request failed"),
    }
    err.into()
}
