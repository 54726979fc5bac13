//! Handlers for the `/admin/api/auth` resource (login, current user).

use axum::extract::State;
use axum::Json;
use folio_core::error::CoreError;
use folio_db::models::staff_user::StaffUserResponse;
use folio_db::repositories::StaffUserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: StaffUserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /admin/api/auth/login
///
/// Authenticate with username + password. Returns an access token.
/// A deactivated account is only reported after the password checks out.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let invalid = || {
        AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        ))
    };

    let user = StaffUserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::warn!(username = %input.username, "Failed staff login");
        return Err(invalid());
    }

    // Only reveal the account state to someone who knows the password.
    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    StaffUserRepo::record_login(&state.pool, user.id).await?;

    let access_token = generate_access_token(user.id, &user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, username = %user.username, "Staff login");

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.expires_in_secs(),
        user: StaffUserResponse::from(&user),
    }))
}

/// GET /admin/api/auth/me
pub async fn me(
    RequireStaff(auth): RequireStaff,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<StaffUserResponse>>> {
    let user = StaffUserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StaffUser",
            id: auth.user_id,
        }))?;

    Ok(Json(DataResponse {
        data: StaffUserResponse::from(&user),
    }))
}
