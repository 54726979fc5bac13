//! Admin handlers for gallery images, edited inline under their portfolio item.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::storage::validate_media_path;
use folio_core::types::DbId;
use folio_core::validation::validate_input;
use folio_db::models::additional_image::{
    AdditionalImage, CreateAdditionalImage, UpdateAdditionalImage,
};
use folio_db::repositories::{AdditionalImageRepo, PortfolioItemRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::render::previews;
use crate::response::DataResponse;
use crate::state::AppState;

/// A gallery image with its thumbnail column.
#[derive(Debug, Serialize)]
pub struct AdditionalImageRow {
    #[serde(flatten)]
    pub image: AdditionalImage,
    pub image_preview: String,
}

impl From<AdditionalImage> for AdditionalImageRow {
    fn from(image: AdditionalImage) -> Self {
        Self {
            image_preview: previews::gallery_image_preview(&image),
            image,
        }
    }
}

/// GET /admin/api/portfolio-items/{item_id}/images
pub async fn list_by_item(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_item_exists(&state, item_id).await?;
    let images = AdditionalImageRepo::list_by_item(&state.pool, item_id).await?;
    let rows: Vec<AdditionalImageRow> = images.into_iter().map(AdditionalImageRow::from).collect();
    Ok(Json(DataResponse { data: rows }))
}

/// POST /admin/api/portfolio-items/{item_id}/images
pub async fn create(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(item_id): Path<DbId>,
    Json(input): Json<CreateAdditionalImage>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    validate_media_path(&input.image)?;
    ensure_item_exists(&state, item_id).await?;

    let image = AdditionalImageRepo::create(&state.pool, item_id, &input).await?;

    tracing::info!(
        image_id = image.id,
        item_id,
        user_id = staff.user_id,
        "Gallery image added",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: AdditionalImageRow::from(image),
        }),
    ))
}

/// PUT /admin/api/images/{id}
pub async fn update(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAdditionalImage>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    if let Some(image) = &input.image {
        validate_media_path(image)?;
    }

    let image = AdditionalImageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AdditionalImage",
            id,
        }))?;

    tracing::info!(image_id = id, user_id = staff.user_id, "Gallery image updated");

    Ok(Json(DataResponse {
        data: AdditionalImageRow::from(image),
    }))
}

/// DELETE /admin/api/images/{id}
pub async fn delete(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !AdditionalImageRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "AdditionalImage",
            id,
        }));
    }

    tracing::info!(image_id = id, user_id = staff.user_id, "Gallery image deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_item_exists(state: &AppState, item_id: DbId) -> AppResult<()> {
    PortfolioItemRepo::find_by_id(&state.pool, item_id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PortfolioItem",
            id: item_id,
        }))
}
