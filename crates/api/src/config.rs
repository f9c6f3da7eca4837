use std::env;
use std::time::Duration;

use journal_core::config::{DEFAULT_API_URL, DEFAULT_API_VERSION};
use journal_core::NotionConfig;

/// Startup configuration failure. Any of these stops the process.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{0} is set but empty")]
    Empty(&'static str),

    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
    /// Site name shown in the header and the document title.
    pub site_title: String,
    /// Content of the description meta tag.
    pub site_description: String,
    /// Footer line, omitted when unset.
    pub footer: Option<String>,
    /// How long shared caches may serve the listing.
    pub listing_revalidate: Duration,
    /// How long shared caches may serve an item page.
    pub item_revalidate: Duration,
    /// Content provider connection.
    pub notion: NotionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    /// `NOTION_TOKEN` and `NOTION_DATABASE_ID` are required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| match lookup(name) {
            None => Err(ConfigError::Missing(name)),
            Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(name)),
            Some(value) => Ok(value.trim().to_string()),
        };
        let or_default =
            |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let mut notion =
            NotionConfig::new(required("NOTION_TOKEN")?, required("NOTION_DATABASE_ID")?);
        notion.api_url = or_default("NOTION_API_URL", DEFAULT_API_URL);
        notion.api_version = or_default("NOTION_VERSION", DEFAULT_API_VERSION);

        Ok(Self {
            host: or_default("HOST", "0.0.0.0"),
            port: parse(&lookup, "PORT", 3030, "a port number")?,
            log_level: or_default("LOG_LEVEL", "info"),
            site_title: or_default("SITE_TITLE", "Journal"),
            site_description: or_default(
                "SITE_DESCRIPTION",
                "A journal with technical journal entries",
            ),
            footer: lookup("SITE_FOOTER").filter(|footer| !footer.is_empty()),
            listing_revalidate: Duration::from_secs(parse(
                &lookup,
                "LISTING_REVALIDATE_SECS",
                15 * 60,
                "a number of seconds",
            )?),
            item_revalidate: Duration::from_secs(parse(
                &lookup,
                "ITEM_REVALIDATE_SECS",
                60 * 60,
                "a number of seconds",
            )?),
            notion,
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
    }
}
