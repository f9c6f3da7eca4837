//! Outbound access to the content provider.
//!
//! Everything here returns raw provider records; shaping them into the model
//! is the adapter's job.

pub mod memory;
pub mod notion;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use memory::MemorySource;
pub use notion::NotionClient;

/// The three provider calls the journal needs.
///
/// Implementations must be `Send + Sync`: one source is shared by every
/// request handler.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Every record in a collection, in provider order.
    async fn query_collection(&self, collection_id: &str) -> Result<Vec<Value>>;

    /// A single item record.
    async fn retrieve_item(&self, item_id: &str) -> Result<Value>;

    /// The immediate children of a block or item, in provider order.
    async fn list_children(&self, block_id: &str) -> Result<Vec<Value>>;
}
