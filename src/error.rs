use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("{0}")]
    Orm(#[from] sea_orm::DbErr),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Db(_) | AppError::Orm(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            match &self {
                AppError::Internal(err) => tracing::error!(error = ?err, "request failed"),
                _ => tracing::error!(error = %self, "request failed"),
            }
        } else {
            tracing::debug!(status = %status, error = %self, "request rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("error body"))
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_entity_in_message() {
        let (status, body) = body_of(AppError::NotFound {
            entity: "product",
            id: 11,
        })
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "product 11 not found");
    }

    #[tokio::test]
    async fn store_failures_map_to_500_and_keep_engine_text() {
        let (status, body) =
            body_of(AppError::Orm(sea_orm::DbErr::Custom("disk I/O error".into()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.error.contains("disk I/O error"));
    }

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let (status, body) = body_of(AppError::Internal(anyhow::anyhow!("secret"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "internal server error");
    }

    #[test]
    fn payload_too_large_is_413() {
        assert_eq!(
            AppError::PayloadTooLarge("length limit exceeded".into()).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn bad_request_is_400() {
        assert_eq!(
            AppError::BadRequest("expected value".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
