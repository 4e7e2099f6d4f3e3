//! In-memory todo store using DashMap

use dashmap::DashMap;
use stockroom_core::{StoreError, TodoStore};

/// Process-lifetime mapping from todo id to value.
///
/// Nothing is persisted and nothing expires. Concurrent writes to the same
/// key resolve last-write-wins.
#[derive(Default)]
pub struct MemoryTodoStore {
    data: DashMap<String, String>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl TodoStore for MemoryTodoStore {
    fn get(&self, key: &str) -> stockroom_core::Result<String> {
        self.data
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::TodoNotFound(key.to_string()))
    }

    fn set(&self, key: &str, value: String) -> String {
        self.data.insert(key.to_string(), value.clone());
        value
    }
}
