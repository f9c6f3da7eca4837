use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use journal_core::ItemId;
use journal_render::BlockRenderer;

use super::cache_control;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::views;

/// Single entry pages.
pub fn routes() -> Router<AppState> {
    Router::new().route("/{id}", get(item))
}

/// Render one published entry. Unknown, malformed and unpublished ids all
/// answer not found.
async fn item(State(state): State<AppState>, Path(raw_id): Path<String>) -> ApiResult<Response> {
    let id = ItemId::parse(&raw_id)
        .ok_or_else(|| ApiError::NotFound(format!("no item {raw_id:?}")))?;
    let id = id.to_string();

    let content = state.adapter().get_item(&id).await?;
    if !content.item.publish {
        return Err(ApiError::NotFound(format!("item {id} is not published")));
    }

    let blocks = BlockRenderer::new(state.adapter())
        .render_page(&content.blocks)
        .await?;

    let config = state.config();
    let page = views::item_page(config, &content.item, &blocks);
    Ok((
        [(header::CACHE_CONTROL, cache_control(config.item_revalidate))],
        Html(page),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};
    use journal_core::source::MemorySource;
    use serde_json::json;

    use journal_render::UNRESOLVED_PAGE_LINK;

    use crate::routes::testing::{get, page, state, text_block, ITEM_A, ITEM_B, ITEM_C};

    #[tokio::test]
    async fn renders_published_item() {
        let source = MemorySource::new()
            .with_item(page(ITEM_A, "Lisbon", Some("2023-06-01T14:30:00.000+01:00"), true))
            .with_children(
                ITEM_A,
                vec![
                    text_block("b1", "heading_1", "Arrival", false),
                    text_block("b2", "paragraph", "Took the tram.", false),
                    json!({ "id": "b3", "type": "divider", "divider": {} }),
                ],
            );

        let (status, headers, body) = get(state(source), &format!("/{ITEM_A}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers[header::CACHE_CONTROL],
            "public, s-maxage=3600, stale-while-revalidate"
        );
        assert!(body.contains(r#"<h1 class="font-black text-3xl">Lisbon</h1>"#));
        assert!(body.contains("<h2>June 1, 2023</h2><h2>14:30</h2>"));

        let heading = body.find("Arrival").unwrap();
        let paragraph = body.find("<p>Took the tram.</p>").unwrap();
        let divider = body.find("<hr />").unwrap();
        assert!(heading < paragraph && paragraph < divider);
    }

    #[tokio::test]
    async fn accepts_compact_and_slugged_ids() {
        let source = MemorySource::new().with_item(page(ITEM_A, "Lisbon", None, true));
        let compact = ITEM_A.replace('-', "");

        let (status, _, _) = get(state(source.clone()), &format!("/{compact}")).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _, _) = get(state(source), &format!("/lisbon-{compact}")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn unpublished_item_is_not_found() {
        let source = MemorySource::new().with_item(page(ITEM_A, "Secret", None, false));
        let (status, headers, body) = get(state(source), &format!("/{ITEM_A}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(headers[header::CACHE_CONTROL], "no-store");
        assert!(!body.contains("Secret"));
    }

    #[tokio::test]
    async fn missing_item_is_not_found() {
        let source = MemorySource::new().with_item(page(ITEM_A, "Lisbon", None, true));
        let (status, _, _) = get(state(source), &format!("/{ITEM_B}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_id_is_not_found_without_provider_call() {
        let (status, _, _) = get(state(MemorySource::unavailable()), "/favicon.ico").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn provider_failure_is_a_server_error() {
        let state = state(MemorySource::unavailable());
        let (status, _, body) = get(state, &format!("/{ITEM_A}")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Something went wrong."));
    }

    #[tokio::test]
    async fn nested_list_and_page_link() {
        let source = MemorySource::new()
            .with_item(page(ITEM_A, "Packing", None, true))
            .with_item(page(ITEM_B, "Day two", None, true))
            .with_children(
                ITEM_A,
                vec![
                    text_block("l1", "bulleted_list_item", "Bags", true),
                    json!({
                        "id": "lp",
                        "type": "link_to_page",
                        "link_to_page": { "type": "page_id", "page_id": ITEM_B }
                    }),
                ],
            )
            .with_children(
                "l1",
                vec![
                    text_block("l2", "bulleted_list_item", "Backpack", false),
                    text_block("l3", "bulleted_list_item", "Camera bag", false),
                ],
            );

        let (status, _, body) = get(state(source), &format!("/{ITEM_A}")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(concat!(
            r#"<li class="list-inside">Bags"#,
            r#"<li class="list-inside">Backpack</li>"#,
            r#"<li class="list-inside">Camera bag</li></li>"#
        )));
        assert!(body.contains(&format!(r#"<a class="underline" href="/{ITEM_B}">Day two</a>"#)));
    }

    #[tokio::test]
    async fn link_to_missing_page_keeps_entry_visible() {
        let source = MemorySource::new()
            .with_item(page(ITEM_A, "Packing", None, true))
            .with_children(
                ITEM_A,
                vec![
                    text_block("p1", "paragraph", "Before", false),
                    json!({
                        "id": "lp",
                        "type": "link_to_page",
                        "link_to_page": { "type": "page_id", "page_id": ITEM_C }
                    }),
                ],
            );

        let (status, _, body) = get(state(source), &format!("/{ITEM_A}")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<p>Before</p>"));
        assert!(body.contains(UNRESOLVED_PAGE_LINK));
    }
}
