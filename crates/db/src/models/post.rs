//! Blog post entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    /// Featured image path, relative to the media root.
    pub featured_image: String,
    /// Rich-text HTML body, rendered verbatim on the detail page.
    pub content: String,
    /// Short summary; empty when not provided.
    pub excerpt: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Post {
    /// Site-relative URL of the blog detail page.
    pub fn absolute_path(&self) -> String {
        format!("/blog/{}/", self.slug)
    }
}

/// DTO for creating a post.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePost {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Derived from the title if omitted or blank.
    #[validate(length(max = 255))]
    pub slug: Option<String>,
    #[validate(length(min = 1))]
    pub featured_image: String,
    pub content: String,
    #[validate(length(max = 300))]
    pub excerpt: Option<String>,
    /// Defaults to now.
    pub created_at: Option<Timestamp>,
}

/// DTO for updating a post. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePost {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
    #[validate(length(min = 1))]
    pub featured_image: Option<String>,
    pub content: Option<String>,
    #[validate(length(max = 300))]
    pub excerpt: Option<String>,
    pub created_at: Option<Timestamp>,
}
