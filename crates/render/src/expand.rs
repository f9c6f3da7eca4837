use async_trait::async_trait;
use journal_core::{Block, ContentAdapter, Result};

/// The lookups rendering needs from the content source.
#[async_trait]
pub trait Expand: Send + Sync {
    /// Immediate children of a block, in order.
    async fn child_blocks(&self, block_id: &str) -> Result<Vec<Block>>;

    /// Title of the item a link points to.
    async fn item_title(&self, item_id: &str) -> Result<Option<String>>;
}

#[async_trait]
impl Expand for ContentAdapter {
    async fn child_blocks(&self, block_id: &str) -> Result<Vec<Block>> {
        self.get_child_blocks(block_id).await
    }

    async fn item_title(&self, item_id: &str) -> Result<Option<String>> {
        Ok(self.get_item_metadata(item_id).await?.title)
    }
}
