//! Media uploads for the admin API.
//!
//! Files are written under `MEDIA_ROOT/<purpose dir>/` with a generated name;
//! the returned relative path is what records store.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::storage::{media_url, UploadPurpose};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Where an upload ended up.
#[derive(Debug, Serialize)]
pub struct StoredUpload {
    /// Path relative to the media root, for use in a record field.
    pub path: String,
    /// Public URL of the stored file.
    pub url: String,
    pub size_bytes: usize,
}

/// POST /admin/api/uploads/{purpose}
///
/// Multipart form with a required `file` field.
pub async fn upload(
    RequireStaff(staff): RequireStaff,
    State(state): State<AppState>,
    Path(purpose): Path<String>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<StoredUpload>>)> {
    let purpose: UploadPurpose = purpose.parse()?;

    let mut file_data: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        file_data = Some((file_name, data.to_vec()));
    }

    let (file_name, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }

    let ext = purpose.validate_file_name(&file_name)?;
    let relative_path = purpose.stored_path(&ext);

    let target = state.config.media_root.join(&relative_path);
    if let Some(dir) = target.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create media directory: {e}")))?;
    }
    tokio::fs::write(&target, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to write upload: {e}")))?;

    tracing::info!(
        purpose = %purpose,
        path = %relative_path,
        size_bytes = data.len(),
        user_id = staff.user_id,
        "Media uploaded",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: StoredUpload {
                url: media_url(&relative_path),
                path: relative_path,
                size_bytes: data.len(),
            },
        }),
    ))
}
