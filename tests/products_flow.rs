mod common;

use storefront_api::{dto::products::CreateProductRequest, error::AppError};

fn widget(code: &str) -> CreateProductRequest {
    CreateProductRequest {
        product_code: code.into(),
        name: "Test Widget".into(),
        inventory: 10,
        price: 1000,
        status: "active".into(),
    }
}

#[tokio::test]
async fn empty_table_lists_nothing() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    assert!(state.products.list().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn created_product_reads_back_with_assigned_id() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let created = state.products.create(widget("W-1")).await?;
    assert!(created.id > 0);

    let fetched = state.products.get(created.id).await?;
    assert_eq!(fetched, created);
    assert_eq!(fetched.product_code, "W-1");
    assert_eq!(fetched.name, "Test Widget");
    assert_eq!(fetched.inventory, 10);
    assert_eq!(fetched.price, 1000);
    assert_eq!(fetched.status, "active");
    Ok(())
}

#[tokio::test]
async fn ids_are_unique_and_codes_may_repeat() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let first = state.products.create(widget("DUP")).await?;
    let second = state.products.create(widget("DUP")).await?;
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let listed = state.products.list().await?;
    assert_eq!(listed.len(), 2);
    assert!(listed.contains(&first));
    assert!(listed.contains(&second));
    Ok(())
}

#[tokio::test]
async fn missing_product_is_not_found() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let err = state.products.get(11).await.expect_err("no such product");
    assert!(matches!(
        err,
        AppError::NotFound {
            entity: "product",
            id: 11
        }
    ));
    Ok(())
}
