//! Testimonial entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub client_name: String,
    pub quote: String,
    /// Empty when the client gave no company.
    pub company: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a testimonial.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTestimonial {
    #[validate(length(min = 1, max = 100))]
    pub client_name: String,
    #[validate(length(min = 1))]
    pub quote: String,
    #[validate(length(max = 100))]
    pub company: Option<String>,
    /// Defaults to now.
    pub created_at: Option<Timestamp>,
}

/// DTO for updating a testimonial. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTestimonial {
    #[validate(length(min = 1, max = 100))]
    pub client_name: Option<String>,
    #[validate(length(min = 1))]
    pub quote: Option<String>,
    #[validate(length(max = 100))]
    pub company: Option<String>,
    pub created_at: Option<Timestamp>,
}
