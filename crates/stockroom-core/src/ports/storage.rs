//! Storage traits for persistence

use crate::Result;
use async_trait::async_trait;
use stockroom_types::{Product, ProductDraft};

/// Product record store
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a new product and return it with its assigned id.
    ///
    /// Fails with `StoreError::DuplicateName` when the name is taken.
    async fn create(&self, draft: &ProductDraft) -> Result<Product>;

    /// Every product, in insertion order.
    async fn list(&self) -> Result<Vec<Product>>;

    async fn get(&self, id: i64) -> Result<Option<Product>>;

    /// Overwrite all four mutable fields. `None` when no product has `id`.
    async fn update(&self, id: i64, draft: &ProductDraft) -> Result<Option<Product>>;

    /// Remove the product and return its last-known values. `None` when no
    /// product has `id`.
    async fn delete(&self, id: i64) -> Result<Option<Product>>;
}

/// Ephemeral key-value store for todos
pub trait TodoStore: Send + Sync {
    /// Fails with `StoreError::TodoNotFound` when the key was never written.
    fn get(&self, key: &str) -> Result<String>;

    /// Store `value` under `key`, replacing any previous value, and return it.
    fn set(&self, key: &str, value: String) -> String;
}
