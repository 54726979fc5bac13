//! First-run creation of a staff account.
//!
//! When `ADMIN_USERNAME` and `ADMIN_PASSWORD` are set and the `staff_users`
//! table is empty, a single account is created at startup so the admin API
//! is reachable on a fresh database.

use folio_db::models::staff_user::{CreateStaffUser, StaffUser};
use folio_db::repositories::StaffUserRepo;
use folio_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};

/// Credentials for the bootstrap account.
#[derive(Debug, Clone)]
pub struct BootstrapCredentials {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl BootstrapCredentials {
    /// `ADMIN_USERNAME`, `ADMIN_PASSWORD` (both required) and `ADMIN_EMAIL`.
    pub fn from_env() -> Option<Self> {
        let username = std::env::var("ADMIN_USERNAME").ok()?;
        let password = std::env::var("ADMIN_PASSWORD").ok()?;
        Some(Self {
            username,
            password,
            email: std::env::var("ADMIN_EMAIL").unwrap_or_default(),
        })
    }
}

/// Create the bootstrap account if no staff user exists yet.
///
/// Returns the created user, or `None` when staff users already exist.
pub async fn ensure_staff_user(
    pool: &DbPool,
    credentials: &BootstrapCredentials,
) -> AppResult<Option<StaffUser>> {
    if StaffUserRepo::count(pool).await? > 0 {
        return Ok(None);
    }

    validate_password_strength(&credentials.password, MIN_PASSWORD_LENGTH)
        .map_err(AppError::BadRequest)?;

    let password_hash = hash_password(&credentials.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = StaffUserRepo::create(
        pool,
        &CreateStaffUser {
            username: credentials.username.clone(),
            email: credentials.email.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap staff user created");
    Ok(Some(user))
}
