use storefront_api::{
    config::AppConfig,
    db::{DbPool, create_pool, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(
        &config.database_url,
        config.db_max_connections,
        config.db_acquire_timeout,
    )
    .await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    seed_products(&pool).await?;

    println!("Seed completed.");
    Ok(())
}

async fn seed_products(pool: &DbPool) -> anyhow::Result<()> {
    let (existing,): (i64,) = sqlx::query_as("SELECT count(*) FROM products")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        println!("Products table already has {existing} rows, skipping");
        return Ok(());
    }

    let products = vec![
        ("AXM-HOODIE", "Axum Hoodie", 50, 5500, "active"),
        ("FRS-MUG", "Ferris Mug", 100, 1200, "active"),
        ("RST-STICKERS", "Rust Sticker Pack", 200, 500, "active"),
        ("EBK-ASYNC", "E-book: Async Rust", 75, 2500, "draft"),
    ];

    let mut tx = pool.begin().await?;
    for (code, name, inventory, price, status) in products {
        sqlx::query(
            r#"
            INSERT INTO products (productCode, name, inventory, price, status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(code)
        .bind(name)
        .bind(inventory)
        .bind(price)
        .bind(status)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    println!("Seeded products");
    Ok(())
}
