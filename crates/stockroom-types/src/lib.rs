//! Stockroom Types - Pure type definitions
//!
//! This crate contains only the wire-level data types shared by the store
//! ports and the HTTP service. It has no runtime or database dependencies.

pub mod product;
pub mod todo;

pub use product::*;
pub use todo::*;
