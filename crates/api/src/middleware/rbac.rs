//! Staff access extractor.
//!
//! Wraps [`AuthUser`] and looks the account up so that deactivated or deleted
//! staff are locked out even while their token is unexpired.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_core::error::CoreError;
use folio_db::repositories::StaffUserRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a valid token for an active staff account.
///
/// Rejects with 401 when the token is missing or invalid and 403 when the
/// account is gone or deactivated.
///
/// ```ignore
/// async fn admin_only(RequireStaff(user): RequireStaff) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireStaff(pub AuthUser);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let active = StaffUserRepo::find_by_id(&state.pool, user.user_id)
            .await?
            .is_some_and(|staff| staff.is_active);
        if !active {
            return Err(AppError::Core(CoreError::Forbidden(
                "Staff account is inactive".into(),
            )));
        }

        Ok(RequireStaff(user))
    }
}
