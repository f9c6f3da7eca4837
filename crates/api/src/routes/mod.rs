pub mod health;
pub mod items;
pub mod listing;

use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;

use crate::state::AppState;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(listing::routes())
        .merge(items::routes())
        .with_state(state)
}

/// Cache policy for shared caches: serve for `window`, then revalidate in
/// the background.
fn cache_control(window: Duration) -> HeaderValue {
    HeaderValue::from_str(&format!(
        "public, s-maxage={}, stale-while-revalidate",
        window.as_secs()
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}
