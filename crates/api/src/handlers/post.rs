//! Admin handlers for blog posts.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::slug::{resolve_slug, validate_slug};
use folio_core::storage::validate_media_path;
use folio_core::types::DbId;
use folio_core::validation::{require_non_blank, validate_input};
use folio_db::models::post::{CreatePost, Post, UpdatePost};
use folio_db::repositories::PostRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::query::SearchParams;
use crate::render::previews;
use crate::response::DataResponse;
use crate::state::AppState;

/// A post with its featured-image thumbnail column.
#[derive(Debug, Serialize)]
pub struct PostRow {
    #[serde(flatten)]
    pub post: Post,
    pub image_preview: String,
    pub url: String,
}

impl From<Post> for PostRow {
    fn from(post: Post) -> Self {
        Self {
            image_preview: previews::post_image_preview(&post),
            url: post.absolute_path(),
            post,
        }
    }
}

/// GET /admin/api/posts
///
/// `?q=` searches title and content.
pub async fn list(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let posts = PostRepo::search(&state.pool, params.term()).await?;
    let rows: Vec<PostRow> = posts.into_iter().map(PostRow::from).collect();
    Ok(Json(DataResponse { data: rows }))
}

/// POST /admin/api/posts
pub async fn create(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreatePost>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    require_non_blank("title", &input.title)?;
    require_non_blank("content", &input.content)?;
    validate_media_path(&input.featured_image)?;

    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    let post = PostRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(
        post_id = post.id,
        slug = %post.slug,
        user_id = staff.user_id,
        "Post created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: PostRow::from(post),
        }),
    ))
}

/// GET /admin/api/posts/{id}
pub async fn get_by_id(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;
    Ok(Json(DataResponse {
        data: PostRow::from(post),
    }))
}

/// PUT /admin/api/posts/{id}
///
/// Partial update; `updated_at` is refreshed by the database.
pub async fn update(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePost>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    if let Some(title) = &input.title {
        require_non_blank("title", title)?;
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }
    if let Some(image) = &input.featured_image {
        validate_media_path(image)?;
    }

    let post = PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    tracing::info!(post_id = id, user_id = staff.user_id, "Post updated");
    Ok(Json(DataResponse {
        data: PostRow::from(post),
    }))
}

/// DELETE /admin/api/posts/{id}
pub async fn delete(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !PostRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Post", id }));
    }

    tracing::info!(post_id = id, user_id = staff.user_id, "Post deleted");
    Ok(StatusCode::NO_CONTENT)
}
