//! Todo types

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A todo entry, serialized as the single-entry object `{"<id>": "<value>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: String,
    pub value: String,
}

impl TodoItem {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

impl Serialize for TodoItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.id, &self.value)?;
        map.end()
    }
}

/// Form-encoded body of a todo write
#[derive(Debug, Clone, Deserialize)]
pub struct TodoForm {
    pub data: String,
}
