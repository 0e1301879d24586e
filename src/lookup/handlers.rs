use super::protocol::{SearchParams, ENDPOINT_COUNTRY_SEARCH};
use super::service::LookupService;
use super::types::LookupError;
use axum::extract::{Extension, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

/// Builds the HTTP surface of the service around a shared `LookupService`.
pub fn router(service: Arc<LookupService>) -> Router {
    Router::new()
        .route(ENDPOINT_COUNTRY_SEARCH, get(handle_country_search))
        .layer(Extension(service))
}

pub async fn handle_country_search(
    Query(params): Query<SearchParams>,
    Extension(service): Extension<Arc<LookupService>>,
) -> Response {
    match service.resolve(&params.name).await {
        Ok(country) => (StatusCode::OK, Json(country)).into_response(),
        Err(err) => {
            let status = match &err {
                LookupError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
                LookupError::NotFound => StatusCode::NOT_FOUND,
                LookupError::UpstreamUnavailable(_) | LookupError::UpstreamInvalidResponse(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };

            if status == StatusCode::INTERNAL_SERVER_ERROR {
                tracing::error!("Failed to resolve {:?}: {}", params.name, err);
            }

            (status, err.to_string()).into_response()
        }
    }
}
