//! HTML rendering of journal blocks and rich text.
//!
//! Rendering is pure apart from one injected capability, [`Expand`], which the
//! block renderer calls to fetch list-item children and link targets.

pub mod block;
pub mod expand;
pub mod rich_text;

pub use block::{BlockRenderer, UNRESOLVED_PAGE_LINK};
pub use expand::Expand;
pub use rich_text::{render_rich_text, render_span};
