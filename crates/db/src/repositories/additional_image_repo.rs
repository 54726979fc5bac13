//! Repository for the `additional_images` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::additional_image::{
    AdditionalImage, CreateAdditionalImage, UpdateAdditionalImage,
};

const COLUMNS: &str = "id, portfolio_item_id, image, caption, created_at, updated_at";

/// Provides CRUD operations for portfolio gallery images.
pub struct AdditionalImageRepo;

impl AdditionalImageRepo {
    /// Attach a gallery image to a portfolio item.
    pub async fn create(
        pool: &PgPool,
        portfolio_item_id: DbId,
        input: &CreateAdditionalImage,
    ) -> Result<AdditionalImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO additional_images (portfolio_item_id, image, caption)
             VALUES ($1, $2, COALESCE($3, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdditionalImage>(&query)
            .bind(portfolio_item_id)
            .bind(&input.image)
            .bind(&input.caption)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AdditionalImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM additional_images WHERE id = $1");
        sqlx::query_as::<_, AdditionalImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an item's gallery in insertion order.
    pub async fn list_by_item(
        pool: &PgPool,
        portfolio_item_id: DbId,
    ) -> Result<Vec<AdditionalImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM additional_images
             WHERE portfolio_item_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, AdditionalImage>(&query)
            .bind(portfolio_item_id)
            .fetch_all(pool)
            .await
    }

    /// Count gallery images owned by an item.
    pub async fn count_by_item(pool: &PgPool, portfolio_item_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM additional_images WHERE portfolio_item_id = $1")
                .bind(portfolio_item_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Update a gallery image. Returns `None` if it does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAdditionalImage,
    ) -> Result<Option<AdditionalImage>, sqlx::Error> {
        let query = format!(
            "UPDATE additional_images SET
                image = COALESCE($2, image),
                caption = COALESCE($3, caption)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdditionalImage>(&query)
            .bind(id)
            .bind(&input.image)
            .bind(&input.caption)
            .fetch_optional(pool)
            .await
    }

    /// Delete a gallery image. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM additional_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
