use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use journal_core::model::sort_newest_first;
use journal_core::TracingSink;

use super::cache_control;
use crate::error::ApiResult;
use crate::state::AppState;
use crate::views;

/// The index of published entries.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index(State(state): State<AppState>) -> ApiResult<Response> {
    let mut items = state.adapter().list_published_items(&mut TracingSink).await?;
    sort_newest_first(&mut items);

    let config = state.config();
    let page = views::listing_page(config, &items);
    Ok((
        [(header::CACHE_CONTROL, cache_control(config.listing_revalidate))],
        Html(page),
    )
        .into_response())
}
