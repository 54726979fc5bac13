//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches

pub mod additional_image;
pub mod portfolio_item;
pub mod post;
pub mod site_configuration;
pub mod staff_user;
pub mod testimonial;
