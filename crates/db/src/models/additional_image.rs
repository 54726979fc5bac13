//! Gallery image model and DTOs. Gallery images are edited inline with
//! their portfolio item and deleted together with it.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `additional_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdditionalImage {
    pub id: DbId,
    pub portfolio_item_id: DbId,
    pub image: String,
    /// Empty when no caption was given.
    pub caption: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching a gallery image to a portfolio item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAdditionalImage {
    #[validate(length(min = 1))]
    pub image: String,
    #[validate(length(max = 200))]
    pub caption: Option<String>,
}

/// DTO for editing a gallery image.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAdditionalImage {
    #[validate(length(min = 1))]
    pub image: Option<String>,
    #[validate(length(max = 200))]
    pub caption: Option<String>,
}
