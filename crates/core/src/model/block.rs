use serde::Deserialize;
use serde_json::{Map, Value};

use super::rich_text::RichText;

/// One structural unit of an item's content.
///
/// Children are never embedded: a block only says whether it has any, and the
/// renderer fetches them one level at a time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawBlock")]
pub struct Block {
    pub id: String,
    pub has_children: bool,
    pub kind: BlockKind,
}

impl Block {
    /// The provider's type tag for this block.
    pub fn kind_name(&self) -> &str {
        match &self.kind {
            BlockKind::Paragraph(_) => "paragraph",
            BlockKind::Heading { level, .. } => level.tag(),
            BlockKind::BulletedListItem(_) => "bulleted_list_item",
            BlockKind::NumberedListItem(_) => "numbered_list_item",
            BlockKind::Code(_) => "code",
            BlockKind::Image(_) => "image",
            BlockKind::Video(_) => "video",
            BlockKind::Divider => "divider",
            BlockKind::LinkToPage(_) => "link_to_page",
            BlockKind::Unsupported(kind) => kind.as_str(),
        }
    }
}

/// Kind-specific payload. The tag fully determines the shape.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    Paragraph(TextBlock),
    Heading { level: HeadingLevel, text: TextBlock },
    BulletedListItem(TextBlock),
    NumberedListItem(TextBlock),
    Code(CodeBlock),
    Image(MediaBlock),
    Video(MediaBlock),
    Divider,
    LinkToPage(LinkToPage),
    /// Any kind this crate does not model, carrying the provider's tag.
    Unsupported(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    One,
    Two,
    Three,
}

impl HeadingLevel {
    pub fn level(self) -> u8 {
        match self {
            HeadingLevel::One => 1,
            HeadingLevel::Two => 2,
            HeadingLevel::Three => 3,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            HeadingLevel::One => "heading_1",
            HeadingLevel::Two => "heading_2",
            HeadingLevel::Three => "heading_3",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub caption: Vec<RichText>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaBlock {
    #[serde(flatten)]
    pub source: FileSource,
    #[serde(default)]
    pub caption: Vec<RichText>,
}

/// Where a media file lives.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileSource {
    /// Linked from elsewhere on the web.
    External { external: FileUrl },
    /// Uploaded to the provider; the URL is short-lived.
    File { file: FileUrl },
    #[serde(other)]
    Unsupported,
}

impl FileSource {
    pub fn url(&self) -> Option<&str> {
        match self {
            FileSource::External { external } => Some(&external.url),
            FileSource::File { file } => Some(&file.url),
            FileSource::Unsupported => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileUrl {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LinkToPage {
    PageId { page_id: String },
    DatabaseId { database_id: String },
    #[serde(other)]
    Unsupported,
}

/// Wire shape: `{ "id", "type": "<kind>", "has_children", "<kind>": { ... } }`.
#[derive(Deserialize)]
struct RawBlock {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    has_children: bool,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl TryFrom<RawBlock> for Block {
    type Error = serde_json::Error;

    fn try_from(mut raw: RawBlock) -> Result<Self, Self::Error> {
        let payload = raw.fields.remove(&raw.kind).unwrap_or(Value::Null);
        let kind = match raw.kind.as_str() {
            "paragraph" => BlockKind::Paragraph(serde_json::from_value(payload)?),
            "heading_1" => heading(HeadingLevel::One, payload)?,
            "heading_2" => heading(HeadingLevel::Two, payload)?,
            "heading_3" => heading(HeadingLevel::Three, payload)?,
            "bulleted_list_item" => BlockKind::BulletedListItem(serde_json::from_value(payload)?),
            "numbered_list_item" => BlockKind::NumberedListItem(serde_json::from_value(payload)?),
            "code" => BlockKind::Code(serde_json::from_value(payload)?),
            "image" => BlockKind::Image(serde_json::from_value(payload)?),
            "video" => BlockKind::Video(serde_json::from_value(payload)?),
            "divider" => BlockKind::Divider,
            "link_to_page" => BlockKind::LinkToPage(serde_json::from_value(payload)?),
            _ => BlockKind::Unsupported(raw.kind),
        };

        Ok(Block {
            id: raw.id,
            has_children: raw.has_children,
            kind,
        })
    }
}

fn heading(level: HeadingLevel, payload: Value) -> Result<BlockKind, serde_json::Error> {
    Ok(BlockKind::Heading {
        level,
        text: serde_json::from_value(payload)?,
    })
}
