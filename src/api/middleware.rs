use poem::error::{MethodNotAllowedError, NotFoundError};
use poem::http::StatusCode;
use poem::web::Json;
use poem::{Error, IntoResponse, Response};
use poem_openapi::error::{ContentTypeError, ParseParamError, ParseRequestPayloadError};
use serde_json::json;
use std::any::Any;

use crate::errors::api::bugs::{INTERNAL_ERROR, VALIDATION_FAILED};

/// Render any error that escaped the handlers as the uniform JSON body
///
/// Server-side failures always collapse to a generic 500 with no detail.
/// Errors that already carry a response (handler `BugError`s) keep it.
pub async fn render_error(err: Error) -> Response {
    let status = err.status();

    if status.is_server_error() {
        tracing::error!("Unhandled error ({}): {}", status, err);
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR, None);
    }

    if err.is::<ParseRequestPayloadError>()
        || err.is::<ParseParamError>()
        || err.is::<ContentTypeError>()
    {
        tracing::debug!("Rejected unparseable request: {}", err);
        return error_response(StatusCode::BAD_REQUEST, VALIDATION_FAILED, Some(err.to_string()));
    }

    if err.is::<NotFoundError>() {
        return error_response(StatusCode::NOT_FOUND, "Route not found", None);
    }

    if err.is::<MethodNotAllowedError>() {
        return error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", None);
    }

    err.into_response()
}

/// Turn a handler panic into the generic 500 response
pub fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Request handler panicked");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR, None)
}

fn error_response(status: StatusCode, error: &str, detail: Option<String>) -> Response {
    let body = match detail {
        Some(detail) => json!({ "success": false, "error": error, "details": [detail] }),
        None => json!({ "success": false, "error": error }),
    };

    Json(body).with_status(status).into_response()
}
