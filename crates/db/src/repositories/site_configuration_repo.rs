//! Repository for the single-row `site_configuration` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::site_configuration::{
    CreateSiteConfiguration, SiteConfiguration, UpdateSiteConfiguration,
};

const COLUMNS: &str = "id, hero_video, about_image, created_at, updated_at";

/// Access to the site configuration. At most one row ever exists.
pub struct SiteConfigurationRepo;

impl SiteConfigurationRepo {
    /// The configuration, if one has been created.
    pub async fn get(pool: &PgPool) -> Result<Option<SiteConfiguration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_configuration ORDER BY id LIMIT 1");
        sqlx::query_as::<_, SiteConfiguration>(&query)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM site_configuration)")
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Insert the configuration unless one already exists.
    ///
    /// Returns `None` when a row is already present. Two racing inserts are
    /// still serialized by the `uq_site_configuration_singleton` index.
    pub async fn create_if_absent(
        pool: &PgPool,
        input: &CreateSiteConfiguration,
    ) -> Result<Option<SiteConfiguration>, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_configuration (hero_video, about_image)
             SELECT $1, $2
             WHERE NOT EXISTS (SELECT 1 FROM site_configuration)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteConfiguration>(&query)
            .bind(&input.hero_video)
            .bind(&input.about_image)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SiteConfiguration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_configuration WHERE id = $1");
        sqlx::query_as::<_, SiteConfiguration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update the configuration. Returns `None` if it does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSiteConfiguration,
    ) -> Result<Option<SiteConfiguration>, sqlx::Error> {
        let query = format!(
            "UPDATE site_configuration SET
                hero_video = COALESCE($2, hero_video),
                about_image = COALESCE($3, about_image)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteConfiguration>(&query)
            .bind(id)
            .bind(&input.hero_video)
            .bind(&input.about_image)
            .fetch_optional(pool)
            .await
    }

    /// Delete the configuration. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM site_configuration WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
