//! Handlers for the public site pages.

use axum::extract::{Path, Query, State};
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use folio_core::contact::{ContactSubmission, CONTACT_REDIRECT};
use folio_core::error::CoreError;
use folio_db::repositories::{
    AdditionalImageRepo, PortfolioItemRepo, PostRepo, SiteConfigurationRepo, TestimonialRepo,
};
use folio_notify::OutboundEmail;
use serde::Deserialize;

use crate::error::{PageError, PageResult};
use crate::render::pages::{self, HomeContext};
use crate::state::AppState;

/// Number of posts teased on the home page.
const LATEST_POSTS_ON_HOME: i64 = 3;

/// Query parameters for `GET /`.
#[derive(Debug, Default, Deserialize)]
pub struct HomeParams {
    pub message_sent: Option<String>,
}

impl HomeParams {
    fn message_sent(&self) -> bool {
        self.message_sent.as_deref() == Some("true")
    }
}

/// GET /
pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<HomeParams>,
) -> PageResult<Html<String>> {
    render_home(&state, params.message_sent()).await
}

/// POST /
///
/// Contact form. A submission (any body with a `name` field) sends one email
/// and redirects to the contact anchor whether or not delivery succeeded.
/// Anything else re-renders the home page.
pub async fn contact(
    State(state): State<AppState>,
    Query(params): Query<HomeParams>,
    Form(form): Form<ContactSubmission>,
) -> PageResult<Response> {
    let Some(message) = form.compose() else {
        return Ok(render_home(&state, params.message_sent()).await?.into_response());
    };

    let email = OutboundEmail::from_contact(message, state.config.contact_recipient.as_str());
    match state.mailer.send(&email).await {
        Ok(()) => tracing::info!(subject = %email.subject, "Contact form message sent"),
        Err(e) => tracing::error!(error = %e, subject = %email.subject, "Error sending contact email"),
    }

    Ok(Redirect::to(CONTACT_REDIRECT).into_response())
}

/// GET /work/{slug}/
pub async fn project_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> PageResult<Html<String>> {
    let item = PortfolioItemRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(PageError::Core(CoreError::SlugNotFound {
            entity: "PortfolioItem",
            slug,
        }))?;
    let gallery = AdditionalImageRepo::list_by_item(&state.pool, item.id).await?;

    Ok(Html(pages::project_detail(&item, &gallery)))
}

/// GET /services/
pub async fn services() -> Html<String> {
    Html(pages::services())
}

/// GET /blog/
pub async fn blog_list(State(state): State<AppState>) -> PageResult<Html<String>> {
    let posts = PostRepo::list(&state.pool).await?;
    Ok(Html(pages::blog_list(&posts)))
}

/// GET /blog/{slug}/
pub async fn blog_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> PageResult<Html<String>> {
    let post = PostRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(PageError::Core(CoreError::SlugNotFound {
            entity: "Post",
            slug,
        }))?;

    Ok(Html(pages::blog_detail(&post)))
}

/// Fallback for unmatched paths.
///
/// A `GET`/`HEAD` for a page path missing its trailing slash
/// (`/blog`, `/work/sunset`) is permanently redirected to the slashed form,
/// query string kept. Everything else gets the 404 page.
pub async fn not_found(method: Method, uri: Uri) -> Response {
    if method == Method::GET || method == Method::HEAD {
        if let Some(mut target) = slashed_page_path(uri.path()) {
            if let Some(query) = uri.query() {
                target.push('?');
                target.push_str(query);
            }
            return (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, target)]).into_response();
        }
    }
    (StatusCode::NOT_FOUND, Html(pages::not_found())).into_response()
}

/// The slashed form of `path` when that form is a visitor page route.
fn slashed_page_path(path: &str) -> Option<String> {
    if path.ends_with('/') {
        return None;
    }
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    let is_page = match segments.as_slice() {
        ["services"] | ["blog"] => true,
        ["work", slug] | ["blog", slug] => !slug.is_empty(),
        _ => false,
    };
    is_page.then(|| format!("{path}/"))
}

async fn render_home(state: &AppState, message_sent: bool) -> PageResult<Html<String>> {
    let portfolio_items = PortfolioItemRepo::list(&state.pool).await?;
    let testimonials = TestimonialRepo::list(&state.pool).await?;
    let latest_posts = PostRepo::list_recent(&state.pool, LATEST_POSTS_ON_HOME).await?;
    let site_config = SiteConfigurationRepo::get(&state.pool).await?;

    Ok(Html(pages::home(&HomeContext {
        portfolio_items: &portfolio_items,
        testimonials: &testimonials,
        latest_posts: &latest_posts,
        site_config: site_config.as_ref(),
        message_sent,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_true_sets_message_sent() {
        let params = |v: Option<&str>| HomeParams {
            message_sent: v.map(str::to_string),
        };
        assert!(params(Some("true")).message_sent());
        assert!(!params(Some("1")).message_sent());
        assert!(!params(None).message_sent());
    }

    #[test]
    fn page_paths_gain_trailing_slash() {
        assert_eq!(slashed_page_path("/services").as_deref(), Some("/services/"));
        assert_eq!(slashed_page_path("/blog").as_deref(), Some("/blog/"));
        assert_eq!(slashed_page_path("/blog/hello").as_deref(), Some("/blog/hello/"));
        assert_eq!(slashed_page_path("/work/sunset").as_deref(), Some("/work/sunset/"));
    }

    #[test]
    fn other_paths_are_left_alone() {
        assert_eq!(slashed_page_path("/services/"), None);
        assert_eq!(slashed_page_path("/work"), None);
        assert_eq!(slashed_page_path("/work/a/b"), None);
        assert_eq!(slashed_page_path("/admin/api/posts"), None);
        assert_eq!(slashed_page_path("/no-such-page"), None);
    }
}
