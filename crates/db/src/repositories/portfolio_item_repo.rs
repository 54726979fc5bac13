//! Repository for the `portfolio_items` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::portfolio_item::{
    CreatePortfolioItem, PortfolioItem, PortfolioItemFilter, UpdatePortfolioItem,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, category, description, image_file, video_file, video_url, \
    slug, date_created, updated_at";

/// Provides CRUD operations for portfolio items.
pub struct PortfolioItemRepo;

impl PortfolioItemRepo {
    /// Insert a new item with an already-resolved `slug`, returning the row.
    ///
    /// Blank media fields are stored as NULL. A duplicate slug fails with
    /// the `uq_portfolio_items_slug` unique violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePortfolioItem,
        slug: &str,
    ) -> Result<PortfolioItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio_items
                (title, category, description, image_file, video_file, video_url, slug)
             VALUES ($1, $2, $3, NULLIF($4, ''), NULLIF($5, ''), NULLIF($6, ''), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(&input.title)
            .bind(input.category.unwrap_or_default().as_str())
            .bind(&input.description)
            .bind(&input.image_file)
            .bind(&input.video_file)
            .bind(&input.video_url)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Find an item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio_items WHERE id = $1");
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an item by slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio_items WHERE slug = $1");
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all items, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM portfolio_items ORDER BY date_created DESC, id DESC"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// List items matching the admin filters, newest first.
    ///
    /// `q` matches title or description case-insensitively; the date bounds
    /// are inclusive.
    pub async fn search(
        pool: &PgPool,
        filter: &PortfolioItemFilter,
    ) -> Result<Vec<PortfolioItem>, sqlx::Error> {
        let pattern = filter
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(|q| format!("%{q}%"));
        let query = format!(
            "SELECT {COLUMNS} FROM portfolio_items
             WHERE ($1::TEXT IS NULL OR title ILIKE $1 OR description ILIKE $1)
               AND ($2::TEXT IS NULL OR category = $2)
               AND ($3::TIMESTAMPTZ IS NULL OR date_created >= $3)
               AND ($4::TIMESTAMPTZ IS NULL OR date_created <= $4)
             ORDER BY date_created DESC, id DESC"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(pattern)
            .bind(filter.category.map(|c| c.as_str()))
            .bind(filter.created_after)
            .bind(filter.created_before)
            .fetch_all(pool)
            .await
    }

    /// Update an item. Only non-`None` fields are applied; an empty string
    /// clears a media field. The slug only changes when one is supplied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePortfolioItem,
    ) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolio_items SET
                title = COALESCE($2, title),
                category = COALESCE($3, category),
                description = COALESCE($4, description),
                image_file = CASE WHEN $5::TEXT IS NULL THEN image_file ELSE NULLIF($5, '') END,
                video_file = CASE WHEN $6::TEXT IS NULL THEN video_file ELSE NULLIF($6, '') END,
                video_url = CASE WHEN $7::TEXT IS NULL THEN video_url ELSE NULLIF($7, '') END,
                slug = COALESCE($8, slug)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.category.map(|c| c.as_str()))
            .bind(&input.description)
            .bind(&input.image_file)
            .bind(&input.video_file)
            .bind(&input.video_url)
            .bind(&input.slug)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item and, through the foreign key cascade, its gallery.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolio_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
