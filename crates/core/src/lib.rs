//! Folio domain logic.
//!
//! Everything here is free of IO so it can be shared by the repository
//! layer, the HTTP server and tests: slug rules, portfolio categories and
//! media precedence, upload purposes, contact message composition and
//! sitemap rendering.

pub mod contact;
pub mod error;
pub mod html;
pub mod portfolio;
pub mod sitemap;
pub mod slug;
pub mod storage;
pub mod types;
pub mod validation;
