//! Error types for Stockroom stores

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    #[error("Todo not found: {0}")]
    TodoNotFound(String),

    #[error("Product name already exists: {0}")]
    DuplicateName(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl StoreError {
    /// True for errors caused by a missing record or key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProductNotFound(_) | Self::TodoNotFound(_))
    }
}
