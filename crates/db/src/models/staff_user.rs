//! Staff user model: accounts that may sign in to the admin API.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full row from the `staff_users` table.
///
/// Contains the password hash -- never serialize this directly. Use
/// [`StaffUserResponse`] for API output.
#[derive(Debug, Clone, FromRow)]
pub struct StaffUser {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe representation for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct StaffUserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
}

impl From<&StaffUser> for StaffUserResponse {
    fn from(user: &StaffUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            is_active: user.is_active,
            last_login_at: user.last_login_at,
        }
    }
}

/// DTO for creating a staff user. The password must already be hashed.
#[derive(Debug, Deserialize)]
pub struct CreateStaffUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
