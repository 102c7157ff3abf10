use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{orders::CreateOrderRequest, products::CreateProductRequest},
    error::ErrorBody,
    models::{Order, OrderItem, Product},
    routes::{health, orders, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        products::create_product,
        orders::list_orders,
        orders::get_order,
        orders::create_order,
    ),
    components(
        schemas(
            Product,
            Order,
            OrderItem,
            CreateProductRequest,
            CreateOrderRequest,
            ErrorBody,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product endpoints"),
        (name = "Orders", description = "Order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
