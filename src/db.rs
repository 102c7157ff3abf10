use std::{str::FromStr, time::Duration};

use anyhow::Result;
use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub type DbPool = SqlitePool;
pub type OrmConn = DatabaseConnection;

/// Open the shared SQLite pool.
///
/// Every in-memory connection is a separate database, so an in-memory URL is
/// pinned to a single connection that is never recycled.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?.foreign_keys(true);

    let pool_options = SqlitePoolOptions::new().acquire_timeout(acquire_timeout);
    let pool_options = if is_in_memory(database_url) {
        pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options.max_connections(max_connections)
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::debug!(database_url, "database pool ready");
    Ok(pool)
}

/// Apply the SQL files embedded from `migrations/`.
pub async fn run_migrations(pool: &DbPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Wrap the sqlx pool in a SeaORM connection sharing the same connections.
pub fn create_orm_conn(pool: DbPool) -> OrmConn {
    SqlxSqliteConnector::from_sqlx_sqlite_pool(pool)
}

/// Fresh, migrated in-memory database for tests.
pub async fn connect_in_memory() -> Result<DbPool> {
    let pool = create_pool("sqlite::memory:", 1, Duration::from_secs(5)).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
