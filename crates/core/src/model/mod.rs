pub mod block;
pub mod id;
pub mod item;
pub mod rich_text;

pub use block::{
    Block, BlockKind, CodeBlock, FileSource, HeadingLevel, LinkToPage, MediaBlock, TextBlock,
};
pub use id::ItemId;
pub use item::{sort_newest_first, Item, ItemContent, UNTITLED};
pub use rich_text::{Annotations, Color, Mention, RichText, RichTextContent};
