use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::products::CreateProductRequest,
    error::{AppResult, ErrorBody},
    models::Product,
    routes::extract::{AppJson, AppPath},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/{id}", get(get_product))
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.products.list().await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Product>> {
    let product = state.products.get(id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Created product with its id", body = Product),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> AppResult<Json<Product>> {
    let product = state.products.create(payload).await?;
    Ok(Json(product))
}
