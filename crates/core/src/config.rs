use std::fmt;

pub const DEFAULT_API_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_API_VERSION: &str = "2022-06-28";

/// Connection settings for the Notion content source.
///
/// Built once at startup and handed to [`crate::ContentAdapter::from_config`].
#[derive(Clone)]
pub struct NotionConfig {
    /// Integration token sent as a bearer credential.
    pub token: String,
    /// Database holding the journal entries.
    pub database_id: String,
    /// Base URL of the REST API, without a trailing slash.
    pub api_url: String,
    /// Value of the `Notion-Version` header.
    pub api_version: String,
    /// Names of the database properties carrying item metadata.
    pub schema: ItemSchema,
}

impl NotionConfig {
    pub fn new(token: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            database_id: database_id.into(),
            api_url: DEFAULT_API_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            schema: ItemSchema::default(),
        }
    }
}

impl fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionConfig")
            .field("token", &"<redacted>")
            .field("database_id", &self.database_id)
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .field("schema", &self.schema)
            .finish()
    }
}

/// Property names looked up on every database record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSchema {
    pub title: String,
    pub date: String,
    pub location: String,
    pub publish: String,
}

impl Default for ItemSchema {
    fn default() -> Self {
        Self {
            title: "Name".to_string(),
            date: "Date".to_string(),
            location: "Location".to_string(),
            publish: "Publish".to_string(),
        }
    }
}
