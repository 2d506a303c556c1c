use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use eventcal_calendar::RangeQuery;

use crate::app::dto::{RangeParams, ResultEnvelope};
use crate::app::errors;
use crate::app::services::AppServices;

pub async fn events_for_day(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Query<RangeParams>, QueryRejection>,
) -> Response {
    range_response(&services, params, RangeQuery::Day)
}

pub async fn events_for_week(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Query<RangeParams>, QueryRejection>,
) -> Response {
    range_response(&services, params, RangeQuery::Week)
}

pub async fn events_for_month(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Query<RangeParams>, QueryRejection>,
) -> Response {
    range_response(&services, params, RangeQuery::Month)
}

fn range_response(
    services: &AppServices,
    params: Result<Query<RangeParams>, QueryRejection>,
    query: RangeQuery,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => {
            return errors::json_error(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };
    let (user_id, date) = match params.into_query() {
        Ok(q) => q,
        Err(e) => return errors::bad_input(e),
    };

    let calendar = services.calendar();
    let found = match query {
        RangeQuery::Day => calendar.events_for_day(user_id, date),
        RangeQuery::Week => calendar.events_for_week(user_id, date),
        RangeQuery::Month => calendar.events_for_month(user_id, date),
    };

    match found {
        Ok(events) => (StatusCode::OK, Json(ResultEnvelope { result: events })).into_response(),
        Err(e) => errors::calendar_error_to_response(e),
    }
}
