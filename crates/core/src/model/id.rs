/// Item id parsing.
///
/// Notion page ids are UUIDs, but they show up in three shapes:
/// - Hyphenated: `1a2b3c4d-0000-0000-0000-000000000000`
/// - Compact: `1a2b3c4d000000000000000000000000`
/// - Slugged, as copied from a share URL: `my-entry-1a2b3c4d000000000000000000000000`
use std::fmt;

use uuid::Uuid;

const COMPACT_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Parse any of the accepted shapes. Returns `None` for anything else.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(id) = Uuid::try_parse(raw) {
            return Some(ItemId(id));
        }
        // Slugged form: the id is the last dash-separated segment
        let (_, tail) = raw.rsplit_once('-')?;
        if tail.len() != COMPACT_LEN {
            return None;
        }
        Uuid::try_parse(tail).ok().map(ItemId)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
