use std::future::Future;
use std::pin::Pin;

use html_escape::{encode_double_quoted_attribute, encode_text};
use journal_core::model::{
    Block, BlockKind, CodeBlock, HeadingLevel, LinkToPage, MediaBlock, TextBlock, UNTITLED,
};
use journal_core::Result;

use crate::expand::Expand;
use crate::rich_text::render_rich_text;

pub const UNRESOLVED_PAGE_LINK: &str = r#"<span class="text-gray-300">Unresolved page link</span>"#;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Maps blocks to HTML.
///
/// Holds nothing but the [`Expand`] handle, so rendering the same blocks
/// against the same content always yields the same markup.
pub struct BlockRenderer<'a> {
    expand: &'a dyn Expand,
}

impl<'a> BlockRenderer<'a> {
    pub fn new(expand: &'a dyn Expand) -> Self {
        Self { expand }
    }

    /// Render an item's top-level blocks, each in its own spaced container.
    /// Blocks that render to nothing get no container.
    pub async fn render_page(&self, blocks: &[Block]) -> Result<String> {
        let mut html = String::new();
        for block in blocks {
            let fragment = self.render(block).await?;
            if !fragment.is_empty() {
                html.push_str(r#"<div class="my-3">"#);
                html.push_str(&fragment);
                html.push_str("</div>");
            }
        }
        Ok(html)
    }

    /// Render one block. Boxed because list items recurse into their children.
    pub fn render<'b>(&'b self, block: &'b Block) -> BoxFuture<'b, Result<String>> {
        Box::pin(async move {
            let html = match &block.kind {
                BlockKind::Paragraph(text) => {
                    format!("<p>{}</p>", render_rich_text(&text.rich_text))
                }
                BlockKind::Heading { level, text } => heading(*level, text),
                BlockKind::BulletedListItem(text) | BlockKind::NumberedListItem(text) => {
                    self.list_item(block, text).await?
                }
                BlockKind::Code(code) => code_block(code),
                BlockKind::Image(media) => media_block(block, media, Media::Image),
                BlockKind::Video(media) => media_block(block, media, Media::Video),
                BlockKind::Divider => "<hr />".to_string(),
                BlockKind::LinkToPage(link) => self.link_to_page(link).await?,
                BlockKind::Unsupported(kind) => {
                    tracing::info!(block_id = %block.id, kind = %kind, "unsupported block type");
                    String::new()
                }
            };
            Ok(html)
        })
    }

    async fn list_item(&self, block: &Block, text: &TextBlock) -> Result<String> {
        let mut html = String::from(r#"<li class="list-inside">"#);
        html.push_str(&render_rich_text(&text.rich_text));
        if block.has_children {
            for child in self.expand.child_blocks(&block.id).await? {
                html.push_str(&self.render(&child).await?);
            }
        }
        html.push_str("</li>");
        Ok(html)
    }

    async fn link_to_page(&self, link: &LinkToPage) -> Result<String> {
        match link {
            LinkToPage::PageId { page_id } => {
                let title = match self.expand.item_title(page_id).await {
                    Ok(title) => title,
                    Err(err) if err.is_not_found() => {
                        tracing::warn!(page_id = %page_id, "link to missing page");
                        return Ok(UNRESOLVED_PAGE_LINK.to_string());
                    }
                    Err(err) => return Err(err),
                };
                Ok(format!(
                    r#"<a class="underline" href="/{}">{}</a>"#,
                    encode_double_quoted_attribute(page_id),
                    encode_text(title.as_deref().unwrap_or(UNTITLED))
                ))
            }
            LinkToPage::DatabaseId { .. } | LinkToPage::Unsupported => {
                Ok(UNRESOLVED_PAGE_LINK.to_string())
            }
        }
    }
}

fn heading(level: HeadingLevel, text: &TextBlock) -> String {
    let weight = match level {
        HeadingLevel::One => "text-4xl font-bold",
        HeadingLevel::Two => "text-2xl font-semibold",
        HeadingLevel::Three => "text-xl font-medium",
    };
    let n = level.level();
    format!(
        r#"<h{n} class="{weight} mb-4">{}</h{n}>"#,
        render_rich_text(&text.rich_text)
    )
}

fn code_block(code: &CodeBlock) -> String {
    let body = render_rich_text(&code.rich_text);
    match code.language.as_deref().filter(|l| !l.is_empty()) {
        Some(language) => format!(
            r#"<pre><code class="language-{}">{body}</code></pre>"#,
            encode_double_quoted_attribute(&language.replace(' ', "-"))
        ),
        None => format!("<pre><code>{body}</code></pre>"),
    }
}

#[derive(Clone, Copy)]
enum Media {
    Image,
    Video,
}

fn media_block(block: &Block, media: &MediaBlock, kind: Media) -> String {
    let Some(url) = media.source.url() else {
        tracing::info!(block_id = %block.id, "media block with unsupported file source");
        return String::new();
    };
    let src = encode_double_quoted_attribute(url);

    let mut html = String::from("<figure>");
    match kind {
        Media::Image => html.push_str(&format!(r#"<img src="{src}" />"#)),
        Media::Video => html.push_str(&format!(r#"<video src="{src}" controls></video>"#)),
    }
    if !media.caption.is_empty() {
        html.push_str("<figcaption>");
        html.push_str(&render_rich_text(&media.caption));
        html.push_str("</figcaption>");
    }
    html.push_str("</figure>");
    html
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use journal_core::source::MemorySource;
    use journal_core::{ContentAdapter, NotionConfig};
    use serde_json::{json, Value};

    fn decode(value: Value) -> Block {
        serde_json::from_value(value).unwrap()
    }

    fn run(text: &str) -> Value {
        json!({ "type": "text", "text": { "content": text, "link": null }, "plain_text": text })
    }

    fn text_block(id: &str, kind: &str, text: &str, has_children: bool) -> Value {
        let mut block = json!({
            "object": "block",
            "id": id,
            "type": kind,
            "has_children": has_children
        });
        block[kind] = json!({ "rich_text": [run(text)] });
        block
    }

    fn adapter(source: MemorySource) -> ContentAdapter {
        ContentAdapter::new(Arc::new(source), &NotionConfig::new("token", "db"))
    }

    async fn render_one(adapter: &ContentAdapter, block: Value) -> String {
        BlockRenderer::new(adapter).render(&decode(block)).await.unwrap()
    }

    #[tokio::test]
    async fn paragraph() {
        let adapter = adapter(MemorySource::new());
        let block = text_block("b1", "paragraph", "Hello & welcome", false);
        let html = render_one(&adapter, block).await;
        assert_eq!(html, "<p>Hello &amp; welcome</p>");
    }

    #[tokio::test]
    async fn heading_levels() {
        let adapter = adapter(MemorySource::new());
        assert_eq!(
            render_one(&adapter, text_block("h1", "heading_1", "Big", false)).await,
            r#"<h1 class="text-4xl font-bold mb-4">Big</h1>"#
        );
        assert_eq!(
            render_one(&adapter, text_block("h2", "heading_2", "Mid", false)).await,
            r#"<h2 class="text-2xl font-semibold mb-4">Mid</h2>"#
        );
        assert_eq!(
            render_one(&adapter, text_block("h3", "heading_3", "Small", false)).await,
            r#"<h3 class="text-xl font-medium mb-4">Small</h3>"#
        );
    }

    #[tokio::test]
    async fn nested_list_renders_children_after_text() {
        let adapter = adapter(MemorySource::new().with_children(
            "parent",
            vec![
                text_block("c1", "bulleted_list_item", "first child", false),
                text_block("c2", "bulleted_list_item", "second child", false),
            ],
        ));

        let block = text_block("parent", "bulleted_list_item", "parent", true);
        let html = render_one(&adapter, block).await;
        assert_eq!(
            html,
            concat!(
                r#"<li class="list-inside">parent"#,
                r#"<li class="list-inside">first child</li>"#,
                r#"<li class="list-inside">second child</li>"#,
                "</li>"
            )
        );
    }

    #[tokio::test]
    async fn deeply_nested_numbered_list() {
        let adapter = adapter(
            MemorySource::new()
                .with_children("a", vec![text_block("b", "numbered_list_item", "b", true)])
                .with_children("b", vec![text_block("c", "paragraph", "c", false)]),
        );

        let html = render_one(&adapter, text_block("a", "numbered_list_item", "a", true)).await;
        assert_eq!(
            html,
            r#"<li class="list-inside">a<li class="list-inside">b<p>c</p></li></li>"#
        );
    }

    #[tokio::test]
    async fn children_are_ignored_without_flag() {
        let adapter = adapter(MemorySource::new().with_children(
            "a",
            vec![text_block("b", "paragraph", "hidden", false)],
        ));
        let html = render_one(&adapter, text_block("a", "bulleted_list_item", "a", false)).await;
        assert_eq!(html, r#"<li class="list-inside">a</li>"#);
    }

    #[tokio::test]
    async fn child_fetch_failure_propagates() {
        let adapter = adapter(MemorySource::unavailable());
        let block = decode(text_block("a", "bulleted_list_item", "a", true));
        assert!(BlockRenderer::new(&adapter).render(&block).await.is_err());
    }

    #[tokio::test]
    async fn code_with_language() {
        let adapter = adapter(MemorySource::new());
        let html = render_one(
            &adapter,
            json!({
                "id": "c",
                "type": "code",
                "code": { "rich_text": [run("fn main() {}")], "caption": [], "language": "rust" }
            }),
        )
        .await;
        assert_eq!(html, r#"<pre><code class="language-rust">fn main() {}</code></pre>"#);
    }

    #[tokio::test]
    async fn media_with_caption() {
        let adapter = adapter(MemorySource::new());
        let image = render_one(
            &adapter,
            json!({
                "id": "i",
                "type": "image",
                "image": {
                    "type": "external",
                    "external": { "url": "https://img.example/a.png" },
                    "caption": [run("Sunset")]
                }
            }),
        )
        .await;
        let video = render_one(
            &adapter,
            json!({
                "id": "v",
                "type": "video",
                "video": { "type": "file", "file": { "url": "https://files.example/v.mp4?sig=a&b" }, "caption": [] }
            }),
        )
        .await;

        assert_eq!(
            image,
            r#"<figure><img src="https://img.example/a.png" /><figcaption>Sunset</figcaption></figure>"#
        );
        assert_eq!(
            video,
            r#"<figure><video src="https://files.example/v.mp4?sig=a&amp;b" controls></video></figure>"#
        );
    }

    #[tokio::test]
    async fn divider() {
        let adapter = adapter(MemorySource::new());
        let block = json!({ "id": "d", "type": "divider", "divider": {} });
        let html = render_one(&adapter, block).await;
        assert_eq!(html, "<hr />");
    }

    #[tokio::test]
    async fn link_to_page_uses_target_title() {
        let adapter = adapter(MemorySource::new().with_item(json!({
            "id": "p2",
            "properties": {
                "Name": { "type": "title", "title": [run("Day two")] }
            }
        })));

        let html = render_one(
            &adapter,
            json!({
                "id": "l",
                "type": "link_to_page",
                "link_to_page": { "type": "page_id", "page_id": "p2" }
            }),
        )
        .await;
        assert_eq!(html, r#"<a class="underline" href="/p2">Day two</a>"#);
    }

    #[tokio::test]
    async fn link_to_missing_page_is_unresolved() {
        let adapter = adapter(MemorySource::new());
        let html = render_one(
            &adapter,
            json!({
                "id": "l",
                "type": "link_to_page",
                "link_to_page": { "type": "page_id", "page_id": "gone" }
            }),
        )
        .await;
        assert_eq!(html, UNRESOLVED_PAGE_LINK);
    }

    #[tokio::test]
    async fn link_target_fetch_failure_propagates() {
        let adapter = adapter(MemorySource::unavailable());
        let block = decode(json!({
            "id": "l",
            "type": "link_to_page",
            "link_to_page": { "type": "page_id", "page_id": "p2" }
        }));
        let err = BlockRenderer::new(&adapter).render(&block).await.unwrap_err();
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn link_to_database_is_unresolved() {
        let adapter = adapter(MemorySource::new());
        let html = render_one(
            &adapter,
            json!({
                "id": "l",
                "type": "link_to_page",
                "link_to_page": { "type": "database_id", "database_id": "d1" }
            }),
        )
        .await;
        assert_eq!(html, UNRESOLVED_PAGE_LINK);
        assert!(!html.contains("<a"));
    }

    #[tokio::test]
    async fn unknown_block_does_not_break_siblings() {
        let adapter = adapter(MemorySource::new());
        let blocks: Vec<Block> = vec![
            decode(text_block("a", "paragraph", "before", false)),
            decode(json!({
                "id": "t",
                "type": "table",
                "has_children": true,
                "table": { "table_width": 2 }
            })),
            decode(text_block("b", "paragraph", "after", false)),
        ];

        let renderer = BlockRenderer::new(&adapter);
        assert_eq!(renderer.render(&blocks[1]).await.unwrap(), "");
        assert_eq!(
            renderer.render_page(&blocks).await.unwrap(),
            r#"<div class="my-3"><p>before</p></div><div class="my-3"><p>after</p></div>"#
        );
    }

    #[tokio::test]
    async fn rendering_is_idempotent() {
        let adapter = adapter(MemorySource::new().with_children(
            "l",
            vec![text_block("c", "paragraph", "child", false)],
        ));
        let blocks: Vec<Block> = vec![
            decode(text_block("h", "heading_2", "Title", false)),
            decode(text_block("l", "bulleted_list_item", "item", true)),
            decode(json!({ "id": "d", "type": "divider", "divider": {} })),
        ];

        let renderer = BlockRenderer::new(&adapter);
        let first = renderer.render_page(&blocks).await.unwrap();
        let second = renderer.render_page(&blocks).await.unwrap();
        assert_eq!(first, second);
    }
}
