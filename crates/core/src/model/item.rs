use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};

use super::block::Block;
use super::rich_text::RichText;

/// Shown wherever an item has no title.
pub const UNTITLED: &str = "Untitled";

/// Normalized metadata of one journal entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub title: Option<String>,
    pub date: Option<DateTime<FixedOffset>>,
    pub location: Option<Vec<RichText>>,
    pub publish: bool,
}

impl Item {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }
}

/// An item together with its top-level blocks, in provider order.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemContent {
    pub item: Item,
    pub blocks: Vec<Block>,
}

/// Order a listing newest first. Undated items go last, keeping their
/// relative order.
pub fn sort_newest_first(items: &mut [Item]) {
    items.sort_by(|a, b| match (&a.date, &b.date) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
