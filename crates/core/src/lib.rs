//! Content model and provider access for the journal.
//!
//! The [`adapter::ContentAdapter`] is the only entry point the rest of the
//! workspace talks to: it queries a [`source::ContentSource`], normalizes page
//! metadata into [`model::Item`]s and decodes block children into the closed
//! [`model::Block`] type.

pub mod adapter;
pub mod config;
pub mod error;
pub mod model;
pub mod source;

pub use adapter::{ContentAdapter, DiagnosticsSink, DroppedRecord, NormalizeError, TracingSink};
pub use config::{ItemSchema, NotionConfig};
pub use error::{ContentError, Result};
pub use model::{Block, BlockKind, Item, ItemContent, ItemId, RichText};
