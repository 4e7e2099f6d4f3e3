//! Stockroom Core Library
//!
//! Storage ports and the store-level error taxonomy shared by every backend.

// Re-export pure types from stockroom-types
pub use stockroom_types::*;

pub mod error;
pub mod ports;

pub use error::{Result, StoreError};
pub use ports::{ProductStore, TodoStore};
