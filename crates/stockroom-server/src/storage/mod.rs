//! Storage layer
//!
//! Products live in SQLite (embedded). Todos live in a DashMap and vanish
//! with the process.

pub mod db;
pub mod memory;

pub use db::Database;
pub use memory::MemoryTodoStore;
