//! Admin handlers for the singleton site configuration.
//!
//! At most one configuration exists. Creation is refused with 409 once it
//! does, and the permissions probe reports whether adding is allowed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::storage::validate_media_path;
use folio_core::types::DbId;
use folio_core::validation::validate_input;
use folio_db::models::site_configuration::{
    CreateSiteConfiguration, SiteConfiguration, UpdateSiteConfiguration,
    SITE_CONFIGURATION_LABEL,
};
use folio_db::repositories::SiteConfigurationRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::render::previews;
use crate::response::DataResponse;
use crate::state::AppState;

/// The configuration with its admin display columns.
#[derive(Debug, Serialize)]
pub struct SiteConfigurationRow {
    #[serde(flatten)]
    pub config: SiteConfiguration,
    pub label: &'static str,
    pub hero_preview: String,
    pub about_preview: String,
}

impl From<SiteConfiguration> for SiteConfigurationRow {
    fn from(config: SiteConfiguration) -> Self {
        Self {
            label: SITE_CONFIGURATION_LABEL,
            hero_preview: previews::hero_preview(&config),
            about_preview: previews::about_preview(&config),
            config,
        }
    }
}

/// Which admin actions are currently allowed.
#[derive(Debug, Serialize)]
pub struct SiteConfigurationPermissions {
    pub can_add: bool,
}

/// GET /admin/api/site-configuration
///
/// Zero or one row.
pub async fn list(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows: Vec<SiteConfigurationRow> = SiteConfigurationRepo::get(&state.pool)
        .await?
        .into_iter()
        .map(SiteConfigurationRow::from)
        .collect();
    Ok(Json(DataResponse { data: rows }))
}

/// GET /admin/api/site-configuration/permissions
pub async fn permissions(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let can_add = !SiteConfigurationRepo::exists(&state.pool).await?;
    Ok(Json(DataResponse {
        data: SiteConfigurationPermissions { can_add },
    }))
}

/// POST /admin/api/site-configuration
///
/// 409 when a configuration already exists.
pub async fn create(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateSiteConfiguration>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    validate_media_path(&input.hero_video)?;
    validate_media_path(&input.about_image)?;

    let config = SiteConfigurationRepo::create_if_absent(&state.pool, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Site configuration already exists; edit the existing record instead".into(),
            ))
        })?;

    tracing::info!(config_id = config.id, user_id = staff.user_id, "Site configuration created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SiteConfigurationRow::from(config),
        }),
    ))
}

/// GET /admin/api/site-configuration/{id}
pub async fn get_by_id(
    RequireStaff(_staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let config = SiteConfigurationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SiteConfiguration",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: SiteConfigurationRow::from(config),
    }))
}

/// PUT /admin/api/site-configuration/{id}
pub async fn update(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSiteConfiguration>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    if let Some(path) = &input.hero_video {
        validate_media_path(path)?;
    }
    if let Some(path) = &input.about_image {
        validate_media_path(path)?;
    }

    let config = SiteConfigurationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SiteConfiguration",
            id,
        }))?;

    tracing::info!(config_id = id, user_id = staff.user_id, "Site configuration updated");
    Ok(Json(DataResponse {
        data: SiteConfigurationRow::from(config),
    }))
}

/// DELETE /admin/api/site-configuration/{id}
pub async fn delete(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !SiteConfigurationRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SiteConfiguration",
            id,
        }));
    }

    tracing::info!(config_id = id, user_id = staff.user_id, "Site configuration deleted");
    Ok(StatusCode::NO_CONTENT)
}
