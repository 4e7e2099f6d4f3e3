//! Product handlers

use crate::error::Result;
use crate::extractors::{AppJson, AppPath};
use crate::AppState;
use axum::{extract::State, Json};
use stockroom_core::{Product, ProductDraft, StoreError};
use tracing::{debug, info};

pub async fn create(
    State(state): State<AppState>,
    AppJson(draft): AppJson<ProductDraft>,
) -> Result<Json<Product>> {
    let product = state.products.create(&draft).await?;
    info!("Created product: id={}, name={}", product.id, product.name);

    Ok(Json(product))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.products.list().await?;
    debug!("Listing {} products", products.len());

    Ok(Json(products))
}

pub async fn get(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Product>> {
    match state.products.get(id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(StoreError::ProductNotFound(id).into()),
    }
}

pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(draft): AppJson<ProductDraft>,
) -> Result<Json<Product>> {
    let product = state
        .products
        .update(id, &draft)
        .await?
        .ok_or(StoreError::ProductNotFound(id))?;
    info!("Updated product: id={}, name={}", product.id, product.name);

    Ok(Json(product))
}

pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Product>> {
    let product = state
        .products
        .delete(id)
        .await?
        .ok_or(StoreError::ProductNotFound(id))?;
    info!("Deleted product: id={}, name={}", product.id, product.name);

    Ok(Json(product))
}
