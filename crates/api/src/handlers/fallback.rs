//! Responses for requests that never reach a handler.

use std::any::Any;

use axum::http::header::ALLOW;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Router fallback for unmatched paths.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

/// Rewrite the empty bodies of axum's 405 and the timeout layer's 408 into
/// the JSON error body. `Allow` is kept on 405s.
pub async fn empty_error_body(response: Response) -> Response {
    match response.status() {
        StatusCode::METHOD_NOT_ALLOWED => {
            let mut json = AppError::MethodNotAllowed.into_response();
            if let Some(allow) = response.headers().get(ALLOW) {
                json.headers_mut().insert(ALLOW, allow.clone());
            }
            json
        }
        StatusCode::REQUEST_TIMEOUT => {
            tracing::warn!("Request timed out");
            AppError::RequestTimeout.into_response()
        }
        _ => response,
    }
}

/// Turn a handler panic into the generic 500 body.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::InternalError(format!("handler panicked: {detail}")).into_response()
}
