use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use eventcal_core::DomainError;
use eventcal_infra::{CalendarError, ErrorKind};

use crate::app::dto::ErrorEnvelope;

/// Status code for each error kind: bad input 400, business rule 503, anything else 500.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::BadInput => StatusCode::BAD_REQUEST,
        ErrorKind::Business => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn calendar_error_to_response(err: CalendarError) -> Response {
    let status = status_for(err.kind());
    if err.kind() == ErrorKind::Internal {
        tracing::error!("calendar operation failed: {err}");
    }
    json_error(status, err.to_string())
}

/// Input that could not be decoded into domain values.
pub fn bad_input(err: DomainError) -> Response {
    calendar_error_to_response(CalendarError::Domain(err))
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorEnvelope {
            error: message.into(),
        }),
    )
        .into_response()
}
