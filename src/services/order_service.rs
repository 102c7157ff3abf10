use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, Set, TransactionTrait};

use crate::{
    db::OrmConn,
    dto::orders::CreateOrderRequest,
    entity::orders::{ActiveModel as OrderActive, Entity as Orders, Model as OrderModel},
    error::{AppError, AppResult},
    models::{Order, OrderItem},
    services::order_items,
};

#[derive(Clone)]
pub struct OrderService {
    orm: OrmConn,
}

impl OrderService {
    pub fn new(orm: OrmConn) -> Self {
        Self { orm }
    }

    /// All orders with their items. Failing to load the items of any one
    /// order fails the whole listing.
    pub async fn list(&self) -> AppResult<Vec<Order>> {
        let rows = Orders::find().all(&self.orm).await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let items = order_items::load_items(&self.orm, row.id).await?;
            orders.push(order_from_entity(row, items));
        }
        Ok(orders)
    }

    pub async fn get(&self, id: i64) -> AppResult<Order> {
        let order = Orders::find_by_id(id).one(&self.orm).await?;
        let order = match order {
            Some(o) => o,
            None => return Err(AppError::NotFound { entity: "order", id }),
        };

        let items = order_items::load_items(&self.orm, order.id).await?;
        Ok(order_from_entity(order, items))
    }

    /// Insert the order row and all of its items in one transaction.
    /// Nothing is persisted if any insert fails.
    pub async fn create(&self, payload: CreateOrderRequest) -> AppResult<Order> {
        let txn = self.orm.begin().await?;

        let order = OrderActive {
            id: NotSet,
            customer_name: Set(payload.customer_name),
            total: Set(payload.total),
            status: Set(payload.status),
        }
        .insert(&txn)
        .await?;

        if let Err(err) = order_items::save_items(&txn, order.id, &payload.items).await {
            tracing::warn!(order_id = order.id, error = %err, "item insert failed, rolling back order");
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!(order_id = order.id, error = %rollback_err, "rollback failed");
            }
            return Err(err.into());
        }

        txn.commit().await?;

        tracing::info!(
            order_id = order.id,
            items = payload.items.len(),
            "order created"
        );
        Ok(order_from_entity(order, payload.items))
    }
}

fn order_from_entity(model: OrderModel, items: Vec<OrderItem>) -> Order {
    Order {
        id: model.id,
        customer_name: model.customer_name,
        total: model.total,
        status: model.status,
        items,
    }
}
