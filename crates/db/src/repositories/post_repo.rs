//! Repository for the `posts` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::post::{CreatePost, Post, UpdatePost};

const COLUMNS: &str =
    "id, title, slug, featured_image, content, excerpt, created_at, updated_at";

/// Provides CRUD operations for blog posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a post with an already-resolved `slug`.
    pub async fn create(pool: &PgPool, input: &CreatePost, slug: &str) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (title, slug, featured_image, content, excerpt, created_at)
             VALUES ($1, $2, $3, $4, COALESCE($5, ''), COALESCE($6, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.featured_image)
            .bind(&input.content)
            .bind(&input.excerpt)
            .bind(input.created_at)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE slug = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all posts, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }

    /// The `limit` most recent posts.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive search over title and content.
    pub async fn search(pool: &PgPool, q: Option<&str>) -> Result<Vec<Post>, sqlx::Error> {
        let pattern = q
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(|q| format!("%{q}%"));
        let query = format!(
            "SELECT {COLUMNS} FROM posts
             WHERE ($1::TEXT IS NULL OR title ILIKE $1 OR content ILIKE $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Update a post; `updated_at` is refreshed by trigger.
    /// Returns `None` if it does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                featured_image = COALESCE($4, featured_image),
                content = COALESCE($5, content),
                excerpt = COALESCE($6, excerpt),
                created_at = COALESCE($7, created_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.featured_image)
            .bind(&input.content)
            .bind(&input.excerpt)
            .bind(input.created_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
