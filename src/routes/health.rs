use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::{AppResult, ErrorBody}, state::AppState};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = HealthData),
        (status = 500, description = "Database unreachable", body = ErrorBody),
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthData>> {
    sqlx::query("SELECT 1").execute(&state.pool).await?;

    Ok(Json(HealthData {
        status: "ok".to_string(),
    }))
}
