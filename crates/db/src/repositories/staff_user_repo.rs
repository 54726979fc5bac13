//! Repository for the `staff_users` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::staff_user::{CreateStaffUser, StaffUser};

const COLUMNS: &str =
    "id, username, email, password_hash, is_active, last_login_at, created_at, updated_at";

/// Provides account operations for staff users.
pub struct StaffUserRepo;

impl StaffUserRepo {
    pub async fn create(pool: &PgPool, input: &CreateStaffUser) -> Result<StaffUser, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff_users (username, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StaffUser>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StaffUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff_users WHERE id = $1");
        sqlx::query_as::<_, StaffUser>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<StaffUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff_users WHERE username = $1");
        sqlx::query_as::<_, StaffUser>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM staff_users")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Stamp `last_login_at` after a successful login.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE staff_users SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
