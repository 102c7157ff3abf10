use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::OrderItem;

/// Body of `POST /orders`. A client-supplied `id` is ignored and `total` is
/// stored as given.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub total: i64,
    pub status: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}
