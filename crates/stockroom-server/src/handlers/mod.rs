//! HTTP handlers

pub mod health;
pub mod products;
pub mod todos;

pub use health::health;
