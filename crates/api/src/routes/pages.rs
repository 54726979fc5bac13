//! Visitor routes.
//!
//! ```text
//! GET  /               home
//! POST /               contact form
//! GET  /services/      services
//! GET  /work/{slug}/   project detail
//! GET  /blog/          blog list
//! GET  /blog/{slug}/   blog detail
//! GET  /sitemap.xml    sitemap
//! GET  /robots.txt     robots
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{feeds, pages};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home).post(pages::contact))
        .route("/services/", get(pages::services))
        .route("/work/{slug}/", get(pages::project_detail))
        .route("/blog/", get(pages::blog_list))
        .route("/blog/{slug}/", get(pages::blog_detail))
        .route("/sitemap.xml", get(feeds::sitemap))
        .route("/robots.txt", get(feeds::robots_txt))
}
