use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Extension, Form},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::app::dto::{self, ResultEnvelope};
use crate::app::errors;
use crate::app::services::AppServices;

fn decode<T>(form: Result<Form<T>, FormRejection>) -> Result<T, Response> {
    form.map(|Form(body)| body)
        .map_err(|rejection| {
            errors::json_error(StatusCode::BAD_REQUEST, rejection.body_text())
        })
}

pub async fn create_event(
    Extension(services): Extension<Arc<AppServices>>,
    form: Result<Form<dto::EventForm>, FormRejection>,
) -> Response {
    let body = match decode(form) {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let event = match body.into_event() {
        Ok(e) => e,
        Err(e) => return errors::bad_input(e),
    };

    match services.calendar().create_event(event) {
        Ok(created) => {
            (StatusCode::CREATED, Json(ResultEnvelope { result: created })).into_response()
        }
        Err(e) => errors::calendar_error_to_response(e),
    }
}

pub async fn update_event(
    Extension(services): Extension<Arc<AppServices>>,
    form: Result<Form<dto::EventForm>, FormRejection>,
) -> Response {
    let body = match decode(form) {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let event = match body.into_event() {
        Ok(e) => e,
        Err(e) => return errors::bad_input(e),
    };

    match services.calendar().update_event(event) {
        Ok(updated) => {
            (StatusCode::OK, Json(ResultEnvelope { result: updated })).into_response()
        }
        Err(e) => errors::calendar_error_to_response(e),
    }
}

pub async fn delete_event(
    Extension(services): Extension<Arc<AppServices>>,
    form: Result<Form<dto::EventKeyForm>, FormRejection>,
) -> Response {
    let body = match decode(form) {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let (user_id, id) = match body.into_key() {
        Ok(key) => key,
        Err(e) => return errors::bad_input(e),
    };

    match services.calendar().delete_event(user_id, id) {
        Ok(removed) => {
            (StatusCode::OK, Json(ResultEnvelope { result: removed })).into_response()
        }
        Err(e) => errors::calendar_error_to_response(e),
    }
}
