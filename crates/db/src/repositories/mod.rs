//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod additional_image_repo;
pub mod portfolio_item_repo;
pub mod post_repo;
pub mod site_configuration_repo;
pub mod staff_user_repo;
pub mod testimonial_repo;

pub use additional_image_repo::AdditionalImageRepo;
pub use portfolio_item_repo::PortfolioItemRepo;
pub use post_repo::PostRepo;
pub use site_configuration_repo::SiteConfigurationRepo;
pub use staff_user_repo::StaffUserRepo;
pub use testimonial_repo::TestimonialRepo;
