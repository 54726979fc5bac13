//! Staff authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.
//! - [`bootstrap`] -- creates the first staff account from the environment.

pub mod bootstrap;
pub mod jwt;
pub mod password;
