use crate::{
    db::{DbPool, OrmConn, create_orm_conn},
    services::{OrderService, ProductService},
};

/// Shared handles given to every request. The stores hold clones of the same
/// connection, so cloning the state never opens new connections.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub products: ProductService,
    pub orders: OrderService,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        let orm = create_orm_conn(pool.clone());
        Self {
            products: ProductService::new(orm.clone()),
            orders: OrderService::new(orm.clone()),
            pool,
            orm,
        }
    }
}
