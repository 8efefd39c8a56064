//! Mapping from store and extractor failures to HTTP responses.
//!
//! Every error body has the shape `{"detail": "..."}`.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use todo_core::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Path(#[from] PathRejection),

    #[error(transparent)]
    Query(#[from] QueryRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Store(StoreError::NotFound(id)) => {
                tracing::debug!(id, "todo not found");
                (StatusCode::NOT_FOUND, "Todo not found".to_string())
            }
            ApiError::Store(StoreError::InvalidArgument(reason)) => {
                tracing::debug!(%reason, "rejected invalid argument");
                (StatusCode::UNPROCESSABLE_ENTITY, reason)
            }
            ApiError::Json(rejection) => {
                tracing::warn!(%rejection, "rejected request body");
                (rejection.status(), rejection.body_text())
            }
            ApiError::Path(rejection) => {
                tracing::warn!(%rejection, "rejected path parameter");
                (rejection.status(), rejection.body_text())
            }
            ApiError::Query(rejection) => {
                tracing::warn!(%rejection, "rejected query string");
                (rejection.status(), rejection.body_text())
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
