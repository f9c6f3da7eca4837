use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use super::ContentSource;
use crate::error::{ContentError, Result};

/// A fixed, in-process content source.
///
/// Serves a snapshot of records without touching the network: every record
/// belongs to the single collection, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    items: Vec<Value>,
    children: HashMap<String, Vec<Value>>,
    unavailable: bool,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source whose every call fails like an unreachable provider.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Add an item record. It must carry an `id` to be retrievable.
    pub fn with_item(mut self, record: Value) -> Self {
        self.items.push(record);
        self
    }

    /// Set the children of a block or item.
    pub fn with_children(mut self, parent_id: impl Into<String>, children: Vec<Value>) -> Self {
        self.children.insert(parent_id.into(), children);
        self
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(ContentError::Provider {
                status: 503,
                code: "service_unavailable".to_string(),
                message: "content source is unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn query_collection(&self, _collection_id: &str) -> Result<Vec<Value>> {
        self.check_available()?;
        Ok(self.items.clone())
    }

    async fn retrieve_item(&self, item_id: &str) -> Result<Value> {
        self.check_available()?;
        self.items
            .iter()
            .find(|record| record.get("id").and_then(Value::as_str) == Some(item_id))
            .cloned()
            .ok_or_else(|| ContentError::NotFound(item_id.to_string()))
    }

    async fn list_children(&self, block_id: &str) -> Result<Vec<Value>> {
        self.check_available()?;
        Ok(self.children.get(block_id).cloned().unwrap_or_default())
    }
}
