//! Request handlers.
//!
//! Visitor pages ([`pages`], [`feeds`]) render HTML or plain text and map
//! errors through [`PageError`](crate::error::PageError). The admin modules
//! return JSON, delegate to the repositories in `folio_db`, and map errors
//! via [`AppError`](crate::error::AppError).

pub mod additional_image;
pub mod auth;
pub mod feeds;
pub mod pages;
pub mod portfolio_item;
pub mod post;
pub mod site_configuration;
pub mod testimonial;
pub mod uploads;

use folio_core::error::CoreError;
use folio_core::storage::validate_media_path;

/// Validate an optional media path; `None` and blank values pass.
pub(crate) fn validate_optional_media(value: Option<&str>) -> Result<(), CoreError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(path) => validate_media_path(path),
        None => Ok(()),
    }
}
