mod common;

use axum::http::{Method, StatusCode};

#[tokio::test]
async fn health_check_returns_ok() -> anyhow::Result<()> {
    let app = common::app(common::setup_state().await?);

    let (status, body) = common::send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_a_json_404() -> anyhow::Result<()> {
    let app = common::app(common::setup_state().await?);

    let (status, body) = common::send(&app, Method::GET, "/customers", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap_or_default().contains("/customers"));
    Ok(())
}
