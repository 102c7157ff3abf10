use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, Set};

use crate::{
    db::OrmConn,
    dto::products::CreateProductRequest,
    entity::products::{ActiveModel, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    models::Product,
};

#[derive(Clone)]
pub struct ProductService {
    orm: OrmConn,
}

impl ProductService {
    pub fn new(orm: OrmConn) -> Self {
        Self { orm }
    }

    /// All products in scan order; an empty table yields an empty list.
    pub async fn list(&self) -> AppResult<Vec<Product>> {
        let products = Products::find()
            .all(&self.orm)
            .await?
            .into_iter()
            .map(product_from_entity)
            .collect();
        Ok(products)
    }

    pub async fn get(&self, id: i64) -> AppResult<Product> {
        let product = Products::find_by_id(id).one(&self.orm).await?;
        match product {
            Some(p) => Ok(product_from_entity(p)),
            None => Err(AppError::NotFound {
                entity: "product",
                id,
            }),
        }
    }

    /// Insert a product and return it with the id assigned by the store.
    /// `product_code` is not required to be unique.
    pub async fn create(&self, payload: CreateProductRequest) -> AppResult<Product> {
        let active = ActiveModel {
            id: NotSet,
            product_code: Set(payload.product_code),
            name: Set(payload.name),
            inventory: Set(payload.inventory),
            price: Set(payload.price),
            status: Set(payload.status),
        };
        let product = active.insert(&self.orm).await?;
        tracing::info!(product_id = product.id, "product created");
        Ok(product_from_entity(product))
    }
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        product_code: model.product_code,
        name: model.name,
        inventory: model.inventory,
        price: model.price,
        status: model.status,
    }
}
