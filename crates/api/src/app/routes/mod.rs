use axum::{
    routing::{get, post},
    Router,
};

pub mod events;
pub mod queries;
pub mod system;

/// Router for the calendar endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/create_event", post(events::create_event))
        .route("/update_event", post(events::update_event))
        .route("/delete_event", post(events::delete_event))
        .route("/events_for_day", get(queries::events_for_day))
        .route("/events_for_week", get(queries::events_for_week))
        .route("/events_for_month", get(queries::events_for_month))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::app::{build_app, services::AppServices};

    async fn send(
        app: &axum::Router,
        method: Method,
        uri: &str,
        form: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match form {
            Some(f) => {
                builder =
                    builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(f.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn app() -> axum::Router {
        build_app(Arc::new(AppServices::new()))
    }

    #[tokio::test]
    async fn create_then_query_day() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/create_event",
            Some("user_id=1&id=1&date=2023-05-01&title=A&description=d"),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({
                "result": {
                    "user_id": 1,
                    "id": 1,
                    "date": "2023-05-01",
                    "title": "A",
                    "description": "d",
                }
            })
        );

        let (status, body) = send(
            &app,
            Method::GET,
            "/events_for_day?user_id=1&date=2023-05-01",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn malformed_input_is_bad_request() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/create_event",
            Some("user_id=abc&id=1&date=2023-05-01&title=A&description=d"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("user_id"));

        let (status, _) = send(
            &app,
            Method::GET,
            "/events_for_week?user_id=1&date=2023-5-1",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn padded_date_is_bad_request() {
        let app = app();
        let (status, _) = send(
            &app,
            Method::POST,
            "/create_event",
            Some("user_id=1&id=1&date=2023-05-01&title=A&description=d"),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            &app,
            Method::GET,
            "/events_for_day?user_id=1&date=%202023-05-01",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("YYYY-MM-DD"));

        let (status, _) = send(
            &app,
            Method::POST,
            "/update_event",
            Some("user_id=1&id=1&date=2023-05-01%20&title=A&description=d"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn business_errors_are_service_unavailable() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::GET,
            "/events_for_month?user_id=9&date=2023-05-01",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body["error"].as_str().unwrap().contains("unknown user"));

        let (status, _) = send(&app, Method::POST, "/delete_event", Some("user_id=9&id=1")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn wrong_method_is_rejected() {
        let app = app();
        let (status, _) = send(&app, Method::GET, "/create_event", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, _) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
