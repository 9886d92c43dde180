//! HTTP boundary: routing, request decoding, error-to-status mapping and
//! the permissive CORS headers the web front end relies on.

use crate::core::assembler;
use crate::domain::model::ConvertRequest;
use crate::domain::ports::FortuneOracle;
use crate::utils::error::SajuError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub oracle: Arc<dyn FortuneOracle>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/convert", post(convert))
        .fallback(not_found)
        .layer(middleware::map_response(append_cors_headers))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!("rejected request body: {}", rejection);
            return error_response(&SajuError::InvalidJson);
        }
    };

    match assembler::assemble(state.oracle.as_ref(), &request).await {
        Ok(data) => (StatusCode::OK, Json(json!({ "ok": true, "data": data }))).into_response(),
        Err(e) => error_response(&e),
    }
}

fn error_response(err: &SajuError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "ok": false,
            "code": err.code(),
            "message": err.client_message(),
        })),
    )
        .into_response()
}

async fn not_found(method: Method) -> Response {
    // preflight requests get an empty 200, any other unknown route a 404
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "ok": false,
            "code": "NOT_FOUND",
            "message": "요청한 엔드포인트를 찾을 수 없습니다.",
        })),
    )
        .into_response()
}

async fn append_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    response
}
