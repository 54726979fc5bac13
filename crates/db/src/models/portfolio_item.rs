//! Portfolio item entity model and DTOs.

use folio_core::portfolio::{is_media_video, Category, MediaKind};
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidateUrl};

/// A row from the `portfolio_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortfolioItem {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub description: String,
    /// Cover image path, relative to the media root.
    pub image_file: Option<String>,
    /// Uploaded video path, relative to the media root.
    pub video_file: Option<String>,
    /// External video link (YouTube, Vimeo, ...).
    pub video_url: Option<String>,
    pub slug: String,
    pub date_created: Timestamp,
    pub updated_at: Timestamp,
}

impl PortfolioItem {
    /// Media to display, by precedence: video file, cover image, external link.
    pub fn media(&self) -> MediaKind {
        MediaKind::resolve(
            self.video_file.as_deref(),
            self.image_file.as_deref(),
            self.video_url.as_deref(),
        )
    }

    pub fn is_media_video(&self) -> bool {
        is_media_video(self.video_file.as_deref(), self.video_url.as_deref())
    }

    /// Parsed category. The column is constrained, so unknown values only
    /// appear if the constraint is bypassed; they fall back to the default.
    pub fn category(&self) -> Category {
        self.category.parse().unwrap_or_default()
    }

    /// Site-relative URL of the project detail page.
    pub fn absolute_path(&self) -> String {
        format!("/work/{}/", self.slug)
    }
}

/// DTO for creating a portfolio item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePortfolioItem {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Defaults to photography if omitted.
    pub category: Option<Category>,
    #[validate(length(min = 1))]
    pub description: String,
    pub image_file: Option<String>,
    pub video_file: Option<String>,
    #[validate(custom(function = "validate_web_url"), length(max = 200))]
    pub video_url: Option<String>,
    /// Derived from the title if omitted or blank.
    #[validate(length(max = 255))]
    pub slug: Option<String>,
}

/// DTO for updating a portfolio item. All fields are optional.
///
/// For the three media fields an empty string clears the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePortfolioItem {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub category: Option<Category>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub image_file: Option<String>,
    pub video_file: Option<String>,
    #[validate(custom(function = "validate_clearable_url"), length(max = 200))]
    pub video_url: Option<String>,
    /// Slugs are never regenerated; a new one may only be set explicitly.
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
}

/// Admin list filters (`?q=&category=&created_after=&created_before=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioItemFilter {
    /// Case-insensitive match against title and description.
    pub q: Option<String>,
    pub category: Option<Category>,
    pub created_after: Option<Timestamp>,
    pub created_before: Option<Timestamp>,
}

/// Require a well-formed `http` or `https` URL. The link ends up in an
/// `href` on the public project page, so other schemes are refused.
fn validate_web_url(value: &str) -> Result<(), validator::ValidationError> {
    let web_scheme = value
        .split_once(':')
        .is_some_and(|(scheme, _)| matches!(scheme.to_ascii_lowercase().as_str(), "http" | "https"));
    if web_scheme && value.validate_url() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("url"))
    }
}

/// Accept an empty string (meaning "clear") or an `http(s)` URL.
fn validate_clearable_url(value: &str) -> Result<(), validator::ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    validate_web_url(value)
}
