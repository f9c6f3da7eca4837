use serde::Deserialize;

/// One styled run of text inside a block.
///
/// The provider encodes the variant as a `type` tag next to a field of the
/// same name, so the payload is flattened into [`RichTextContent`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RichText {
    #[serde(flatten)]
    pub content: RichTextContent,
    #[serde(default)]
    pub annotations: Annotations,
    /// Provider-rendered text for the whole run, mentions included.
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl RichText {
    /// Unstyled text run, mostly useful for building fixtures.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        RichText {
            content: RichTextContent::Text {
                text: TextContent {
                    content: text.clone(),
                    link: None,
                },
            },
            annotations: Annotations::default(),
            plain_text: text,
            href: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextContent {
    Text { text: TextContent },
    Mention { mention: Mention },
    Equation { equation: Equation },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default)]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Equation {
    pub expression: String,
}

/// Style flags. Every flag is independent of the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
    GrayBackground,
    BrownBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
    RedBackground,
    #[serde(other)]
    Unknown,
}

/// Reference to another entity embedded in text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mention {
    Date { date: DateMention },
    User { user: UserMention },
    Page { page: Reference },
    Database { database: Reference },
    LinkPreview { link_preview: LinkPreview },
    #[serde(other)]
    Unsupported,
}

impl Mention {
    /// Where a navigable mention points to. Date and user mentions have no target.
    ///
    /// The run's own `href` wins; otherwise pages link to their local route and
    /// link previews to their source URL.
    pub fn link_target(&self, href: Option<&str>) -> Option<String> {
        match self {
            Mention::Page { page } => {
                Some(href.map_or_else(|| format!("/{}", page.id), str::to_string))
            }
            Mention::Database { .. } => href.map(str::to_string),
            Mention::LinkPreview { link_preview } => {
                Some(href.unwrap_or(&link_preview.url).to_string())
            }
            Mention::Date { .. } | Mention::User { .. } | Mention::Unsupported => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DateMention {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserMention {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkPreview {
    pub url: String,
}
