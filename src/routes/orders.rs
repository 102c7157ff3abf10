use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::orders::CreateOrderRequest,
    error::{AppResult, ErrorBody},
    models::Order,
    routes::extract::{AppJson, AppPath},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", get(get_order))
}

#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders with their items", body = Vec<Order>),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.orders.list().await?;
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order with its items", body = Order),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Order>> {
    let order = state.orders.get(id).await?;
    Ok(Json(order))
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Created order with its id and items", body = Order),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 500, description = "Store failure; nothing was written", body = ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateOrderRequest>,
) -> AppResult<Json<Order>> {
    let order = state.orders.create(payload).await?;
    Ok(Json(order))
}
