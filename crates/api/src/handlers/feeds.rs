//! Machine-readable feeds: `sitemap.xml` and `robots.txt`.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use folio_core::sitemap::{self, SitemapEntry, PORTFOLIO_GROUP, POST_GROUP, STATIC_GROUP, STATIC_PAGES};
use folio_db::repositories::{PortfolioItemRepo, PostRepo};

use crate::error::PageResult;
use crate::render::pages;
use crate::state::AppState;

/// GET /sitemap.xml
///
/// Portfolio items, then posts, then the static pages.
pub async fn sitemap(State(state): State<AppState>) -> PageResult<impl IntoResponse> {
    let base = state.config.site_url.as_str();
    let items = PortfolioItemRepo::list(&state.pool).await?;
    let posts = PostRepo::list(&state.pool).await?;

    let mut entries = Vec::with_capacity(items.len() + posts.len() + STATIC_PAGES.len());
    entries.extend(items.iter().map(|item| {
        SitemapEntry::new(base, &item.absolute_path(), Some(item.date_created), PORTFOLIO_GROUP)
    }));
    entries.extend(
        posts
            .iter()
            .map(|post| SitemapEntry::new(base, &post.absolute_path(), Some(post.updated_at), POST_GROUP)),
    );
    entries.extend(
        STATIC_PAGES
            .iter()
            .map(|path| SitemapEntry::new(base, path, None, STATIC_GROUP)),
    );

    tracing::debug!(entries = entries.len(), "Sitemap rendered");
    Ok(([(CONTENT_TYPE, "application/xml")], sitemap::render(&entries)))
}

/// GET /robots.txt
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        pages::robots_txt(&state.config.site_url),
    )
}
