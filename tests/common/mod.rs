#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use sea_orm::{ConnectionTrait, Statement};
use serde_json::Value;
use storefront_api::{db::connect_in_memory, routes::create_api_router, state::AppState};
use tower::ServiceExt;

/// State over a fresh, migrated in-memory database.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let pool = connect_in_memory().await?;
    Ok(AppState::new(pool))
}

/// Drop `table` so the next query against it fails inside the engine.
pub async fn drop_table(state: &AppState, table: &str) -> anyhow::Result<()> {
    let backend = state.orm.get_database_backend();
    state
        .orm
        .execute(Statement::from_string(backend, format!("DROP TABLE {table}")))
        .await?;
    Ok(())
}

pub fn app(state: AppState) -> Router {
    create_api_router().with_state(state)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_owned())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("infallible");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(
        content_type.starts_with("application/json"),
        "expected a JSON response, got {content_type:?}"
    );

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}
