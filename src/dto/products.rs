use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /products`. A client-supplied `id` is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub product_code: String,
    pub name: String,
    pub inventory: i64,
    pub price: i64,
    pub status: String,
}
