use std::future::Future;

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::Deserialize;
use serde_json::{json, Value};

use super::ContentSource;
use crate::config::NotionConfig;
use crate::error::{ContentError, Result};

/// Largest page the API hands out.
const PAGE_SIZE: u32 = 100;

/// HTTP client for the Notion REST API.
#[derive(Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
    api_version: String,
}

/// Envelope of every paginated list endpoint.
#[derive(Debug, Deserialize)]
struct ListPage {
    results: Vec<Value>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}

impl NotionClient {
    pub fn new(config: &NotionConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("journal/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            api_version: config.api_version.clone(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/{}", self.api_url, path))
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.api_version)
    }

    fn query_request(&self, collection_id: &str, cursor: Option<&str>) -> RequestBuilder {
        let mut body = json!({ "page_size": PAGE_SIZE });
        if let Some(cursor) = cursor {
            body["start_cursor"] = json!(cursor);
        }
        self.request(Method::POST, &format!("databases/{collection_id}/query"))
            .json(&body)
    }

    fn children_request(&self, block_id: &str, cursor: Option<&str>) -> RequestBuilder {
        let request = self
            .request(Method::GET, &format!("blocks/{block_id}/children"))
            .query(&[("page_size", PAGE_SIZE)]);
        match cursor {
            Some(cursor) => request.query(&[("start_cursor", cursor)]),
            None => request,
        }
    }

    /// Send a request and decode the JSON body, mapping provider errors.
    /// `subject` is the id the request is about, used in not-found errors.
    async fn send(&self, request: RequestBuilder, subject: &str) -> Result<Value> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<Value>().await?);
        }

        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        let error = classify_error(status.as_u16(), &body, subject);
        tracing::debug!(
            status = status.as_u16(),
            subject,
            %error,
            "content provider request failed"
        );
        Err(error)
    }

    async fn fetch_page(&self, request: RequestBuilder, subject: &str) -> Result<ListPage> {
        Ok(serde_json::from_value(self.send(request, subject).await?)?)
    }
}

#[async_trait]
impl ContentSource for NotionClient {
    async fn query_collection(&self, collection_id: &str) -> Result<Vec<Value>> {
        let records = collect_pages(|cursor| {
            let request = self.query_request(collection_id, cursor.as_deref());
            self.fetch_page(request, collection_id)
        })
        .await?;

        tracing::debug!(collection_id, count = records.len(), "queried collection");
        Ok(records)
    }

    async fn retrieve_item(&self, item_id: &str) -> Result<Value> {
        let path = format!("pages/{item_id}");
        self.send(self.request(Method::GET, &path), item_id).await
    }

    async fn list_children(&self, block_id: &str) -> Result<Vec<Value>> {
        collect_pages(|cursor| {
            let request = self.children_request(block_id, cursor.as_deref());
            self.fetch_page(request, block_id)
        })
        .await
    }
}

/// Drain a cursor-paginated endpoint, keeping page order.
///
/// `fetch` is called with `None` first, then with each `next_cursor` until a
/// page reports `has_more: false` or carries no cursor.
async fn collect_pages<F, Fut>(mut fetch: F) -> Result<Vec<Value>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<ListPage>>,
{
    let mut results = Vec::new();
    let mut cursor = None;

    loop {
        let page = fetch(cursor.take()).await?;
        results.extend(page.results);
        match page.next_cursor {
            Some(next) if page.has_more => cursor = Some(next),
            _ => return Ok(results),
        }
    }
}

/// Map a non-success response to an error.
///
/// The API answers with `{ "object": "error", "status", "code", "message" }`.
/// Ids that are not valid UUIDs come back as a 400 `validation_error`.
fn classify_error(status: u16, body: &Value, subject: &str) -> ContentError {
    let code = body.get("code").and_then(Value::as_str).unwrap_or_default();
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default();

    match (status, code) {
        (404, _) | (_, "object_not_found") => ContentError::NotFound(subject.to_string()),
        (400, "validation_error") => ContentError::InvalidId(subject.to_string()),
        (401, _) | (_, "unauthorized") => ContentError::Unauthorized,
        _ => ContentError::Provider {
            status,
            code: code.to_string(),
            message: message.to_string(),
        },
    }
}
