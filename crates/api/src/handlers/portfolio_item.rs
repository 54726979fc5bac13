//! Admin handlers for portfolio items.
//!
//! List rows carry the computed display columns (`media_kind`,
//! `media_preview`, `is_video`); the detail view adds the inline gallery.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::slug::{resolve_slug, validate_slug};
use folio_core::types::DbId;
use folio_core::validation::{require_non_blank, validate_input};
use folio_db::models::portfolio_item::{
    CreatePortfolioItem, PortfolioItem, PortfolioItemFilter, UpdatePortfolioItem,
};
use folio_db::repositories::{AdditionalImageRepo, PortfolioItemRepo};
use serde::Serialize;

use super::additional_image::AdditionalImageRow;
use super::validate_optional_media;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::render::previews;
use crate::response::DataResponse;
use crate::state::AppState;

/// A portfolio item with its admin display columns.
#[derive(Debug, Serialize)]
pub struct PortfolioItemRow {
    #[serde(flatten)]
    pub item: PortfolioItem,
    pub media_kind: &'static str,
    pub media_preview: String,
    pub is_video: bool,
    pub url: String,
}

impl From<PortfolioItem> for PortfolioItemRow {
    fn from(item: PortfolioItem) -> Self {
        Self {
            media_kind: item.media().tag(),
            media_preview: previews::media_preview(&item),
            is_video: item.is_media_video(),
            url: item.absolute_path(),
            item,
        }
    }
}

/// Detail view: the row plus its gallery, oldest image first.
#[derive(Debug, Serialize)]
pub struct PortfolioItemDetail {
    #[serde(flatten)]
    pub row: PortfolioItemRow,
    pub gallery: Vec<AdditionalImageRow>,
}

/// GET /admin/api/portfolio-items
///
/// Supports `?q=`, `?category=`, `?created_after=` and `?created_before=`.
pub async fn list(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Query(filter): Query<PortfolioItemFilter>,
) -> AppResult<impl IntoResponse> {
    let items = PortfolioItemRepo::search(&state.pool, &filter).await?;
    let rows: Vec<PortfolioItemRow> = items.into_iter().map(PortfolioItemRow::from).collect();
    Ok(Json(DataResponse { data: rows }))
}

/// POST /admin/api/portfolio-items
///
/// The slug is derived from the title unless one is supplied.
pub async fn create(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreatePortfolioItem>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    require_non_blank("title", &input.title)?;
    require_non_blank("description", &input.description)?;
    validate_optional_media(input.image_file.as_deref())?;
    validate_optional_media(input.video_file.as_deref())?;

    let slug = resolve_slug(input.slug.as_deref(), &input.title)?;
    let item = PortfolioItemRepo::create(&state.pool, &input, &slug).await?;

    tracing::info!(
        item_id = item.id,
        slug = %item.slug,
        user_id = staff.user_id,
        "Portfolio item created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: PortfolioItemRow::from(item),
        }),
    ))
}

/// GET /admin/api/portfolio-items/{id}
pub async fn get_by_id(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = PortfolioItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PortfolioItem",
            id,
        }))?;
    let gallery = AdditionalImageRepo::list_by_item(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: PortfolioItemDetail {
            row: PortfolioItemRow::from(item),
            gallery: gallery.into_iter().map(AdditionalImageRow::from).collect(),
        },
    }))
}

/// PUT /admin/api/portfolio-items/{id}
///
/// Partial update. The slug is kept unless a new one is given explicitly;
/// an empty string clears a media field.
pub async fn update(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePortfolioItem>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    if let Some(title) = &input.title {
        require_non_blank("title", title)?;
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }
    validate_optional_media(input.image_file.as_deref())?;
    validate_optional_media(input.video_file.as_deref())?;

    let item = PortfolioItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PortfolioItem",
            id,
        }))?;

    tracing::info!(item_id = id, user_id = staff.user_id, "Portfolio item updated");

    Ok(Json(DataResponse {
        data: PortfolioItemRow::from(item),
    }))
}

/// DELETE /admin/api/portfolio-items/{id}
///
/// Also removes the item's gallery images.
pub async fn delete(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !PortfolioItemRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "PortfolioItem",
            id,
        }));
    }

    tracing::info!(item_id = id, user_id = staff.user_id, "Portfolio item deleted");
    Ok(StatusCode::NO_CONTENT)
}
