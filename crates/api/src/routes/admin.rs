//! Admin API routes, mounted at `/admin/api`.
//!
//! Everything except login requires a staff Bearer token.
//!
//! ```text
//! POST   /auth/login                          login (public)
//! GET    /auth/me                             current staff user
//!
//! GET    /portfolio-items                     list (?q, category, created_after, created_before)
//! POST   /portfolio-items                     create
//! GET    /portfolio-items/{id}                get with gallery
//! PUT    /portfolio-items/{id}                update
//! DELETE /portfolio-items/{id}                delete (cascades to gallery)
//! GET    /portfolio-items/{id}/images         list gallery
//! POST   /portfolio-items/{id}/images         add gallery image
//! PUT    /images/{id}                         update gallery image
//! DELETE /images/{id}                         delete gallery image
//!
//! GET    /testimonials                        list (?q)
//! POST   /testimonials                        create
//! GET    /testimonials/{id}                   get
//! PUT    /testimonials/{id}                   update
//! DELETE /testimonials/{id}                   delete
//!
//! GET    /posts                               list (?q)
//! POST   /posts                               create
//! GET    /posts/{id}                          get
//! PUT    /posts/{id}                          update
//! DELETE /posts/{id}                          delete
//!
//! GET    /site-configuration                  list (zero or one)
//! POST   /site-configuration                  create (409 if one exists)
//! GET    /site-configuration/permissions      can_add probe
//! GET    /site-configuration/{id}             get
//! PUT    /site-configuration/{id}             update
//! DELETE /site-configuration/{id}             delete
//!
//! POST   /uploads/{purpose}                   multipart upload
//! ```

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{
    additional_image, auth, portfolio_item, post, site_configuration, testimonial, uploads,
};
use crate::state::AppState;

/// Build the admin router. Upload bodies may be up to `max_upload_bytes`.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .nest("/portfolio-items", portfolio_item_router())
        .route(
            "/images/{id}",
            put(additional_image::update).delete(additional_image::delete),
        )
        .nest("/testimonials", testimonial_router())
        .nest("/posts", post_router())
        .nest("/site-configuration", site_configuration_router())
        .route(
            "/uploads/{purpose}",
            post(uploads::upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
}

fn portfolio_item_router() -> Router<AppState> {
    Router::new()
        .route("/", get(portfolio_item::list).post(portfolio_item::create))
        .route(
            "/{id}",
            get(portfolio_item::get_by_id)
                .put(portfolio_item::update)
                .delete(portfolio_item::delete),
        )
        .route(
            "/{id}/images",
            get(additional_image::list_by_item).post(additional_image::create),
        )
}

fn testimonial_router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonial::list).post(testimonial::create))
        .route(
            "/{id}",
            get(testimonial::get_by_id)
                .put(testimonial::update)
                .delete(testimonial::delete),
        )
}

fn post_router() -> Router<AppState> {
    Router::new()
        .route("/", get(post::list).post(post::create))
        .route(
            "/{id}",
            get(post::get_by_id).put(post::update).delete(post::delete),
        )
}

fn site_configuration_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(site_configuration::list).post(site_configuration::create),
        )
        .route("/permissions", get(site_configuration::permissions))
        .route(
            "/{id}",
            get(site_configuration::get_by_id)
                .put(site_configuration::update)
                .delete(site_configuration::delete),
        )
}
