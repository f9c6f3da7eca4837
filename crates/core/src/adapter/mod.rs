pub mod diagnostics;
pub mod normalize;

use std::sync::Arc;

use crate::config::{ItemSchema, NotionConfig};
use crate::error::{ContentError, Result};
use crate::model::{Block, Item, ItemContent};
use crate::source::{ContentSource, NotionClient};

pub use diagnostics::{DiagnosticsSink, DroppedRecord, TracingSink};
pub use normalize::{item_metadata, NormalizeError};

/// Read-only access to journal content, shaped into the model.
///
/// Cloning is cheap; all clones share one source.
#[derive(Clone)]
pub struct ContentAdapter {
    source: Arc<dyn ContentSource>,
    collection_id: String,
    schema: ItemSchema,
}

impl ContentAdapter {
    pub fn new(source: Arc<dyn ContentSource>, config: &NotionConfig) -> Self {
        Self {
            source,
            collection_id: config.database_id.clone(),
            schema: config.schema.clone(),
        }
    }

    /// Adapter backed by the Notion API.
    pub fn from_config(config: &NotionConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(NotionClient::new(config)?), config))
    }

    /// Published items of the collection, in provider order.
    ///
    /// Records that fail normalization go to `sink` instead of failing the
    /// listing. Only the collection query itself can fail.
    pub async fn list_published_items(&self, sink: &mut dyn DiagnosticsSink) -> Result<Vec<Item>> {
        let records = self.source.query_collection(&self.collection_id).await?;
        let total = records.len();

        let mut items = Vec::with_capacity(total);
        for record in &records {
            match item_metadata(record, &self.schema) {
                Ok(item) if item.publish => items.push(item),
                Ok(_) => {}
                Err(error) => sink.dropped(DroppedRecord {
                    id: normalize::record_id(record),
                    error,
                }),
            }
        }

        tracing::debug!(total, published = items.len(), "listed collection");
        Ok(items)
    }

    /// One item's metadata, without its blocks. Does not check the publish flag.
    pub async fn get_item_metadata(&self, id: &str) -> Result<Item> {
        let record = self.source.retrieve_item(id).await?;
        Ok(item_metadata(&record, &self.schema)?)
    }

    /// One item with its top-level blocks. Does not check the publish flag;
    /// gating is up to the caller.
    pub async fn get_item(&self, id: &str) -> Result<ItemContent> {
        let item = self.get_item_metadata(id).await?;
        let blocks = self.get_child_blocks(id).await?;
        Ok(ItemContent { item, blocks })
    }

    /// Immediate children of a block or item. Does not recurse.
    pub async fn get_child_blocks(&self, block_id: &str) -> Result<Vec<Block>> {
        self.source
            .list_children(block_id)
            .await?
            .into_iter()
            .map(|raw| serde_json::from_value(raw).map_err(ContentError::from))
            .collect()
    }
}
