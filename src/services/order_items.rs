//! Loads and persists the line items of an order through the `order_items`
//! join table.
//!
//! Both functions take any [`ConnectionTrait`], so callers decide whether the
//! work runs on the pool or inside a transaction. `save_items` issues one
//! insert per item and is not atomic on its own.

use sea_orm::{ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::{
    entity::order_items::{ActiveModel, Column, Entity as OrderItems, Model},
    models::OrderItem,
};

/// Items of `order_id` in the engine's natural scan order.
pub async fn load_items<C>(conn: &C, order_id: i64) -> Result<Vec<OrderItem>, DbErr>
where
    C: ConnectionTrait,
{
    let items = OrderItems::find()
        .filter(Column::OrderId.eq(order_id))
        .all(conn)
        .await?
        .into_iter()
        .map(order_item_from_entity)
        .collect();
    Ok(items)
}

/// Insert one join row per item. Stops at the first failed insert; rows
/// written before it stay unless `conn` is a transaction that gets rolled back.
pub async fn save_items<C>(conn: &C, order_id: i64, items: &[OrderItem]) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    for item in items {
        let row = ActiveModel {
            order_id: Set(order_id),
            product_id: Set(item.product_id),
            quantity: Set(item.quantity),
        };
        OrderItems::insert(row).exec_without_returning(conn).await?;
    }
    tracing::trace!(order_id, count = items.len(), "order items saved");
    Ok(())
}

fn order_item_from_entity(model: Model) -> OrderItem {
    OrderItem {
        product_id: model.product_id,
        quantity: model.quantity,
    }
}
