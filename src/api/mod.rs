pub mod health;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};

use crate::db::AppState;
use crate::domain::errors::{AppError, HttpError};
use crate::types::JsonValue;

/// Build the application router.
///
/// Only the health check is wired; domain routers merge below as the
/// application grows endpoints.
pub fn api_router(state: AppState) -> Router {
    let routers: Vec<Router<AppState>> = Vec::new();

    let mut router = Router::new().route("/", get(health::health_check));
    for domain_router in routers {
        router = router.merge(domain_router);
    }

    router.with_state(state)
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::BAD_REQUEST);
        (status, Json(self.to_json())).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Http(err) => err.into_response(),
            AppError::Business(err) => {
                HttpError::new(400, err.to_string(), JsonValue::Null).into_response()
            }
            AppError::Database(err) => {
                tracing::error!("database error: {}", err);
                HttpError::new(500, "Internal Server Error", JsonValue::Null).into_response()
            }
        }
    }
}
