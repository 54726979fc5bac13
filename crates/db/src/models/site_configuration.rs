//! Site configuration: the single record holding the home page hero video
//! and the about-section image.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Label used wherever the record is listed.
pub const SITE_CONFIGURATION_LABEL: &str = "Home Page Settings";

/// The row from the `site_configuration` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteConfiguration {
    pub id: DbId,
    pub hero_video: String,
    pub about_image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating the site configuration.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSiteConfiguration {
    #[validate(length(min = 1))]
    pub hero_video: String,
    #[validate(length(min = 1))]
    pub about_image: String,
}

/// DTO for updating the site configuration.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSiteConfiguration {
    #[validate(length(min = 1))]
    pub hero_video: Option<String>,
    #[validate(length(min = 1))]
    pub about_image: Option<String>,
}
