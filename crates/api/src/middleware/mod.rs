//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated staff user from a JWT Bearer token.
//! - [`rbac::RequireStaff`] -- Additionally requires the account to still be active.

pub mod auth;
pub mod rbac;
