//! Route tree.
//!
//! ```text
//! /health                 service health (JSON)
//! /, /services/, /work/…  visitor pages (HTML), see [`pages`]
//! /sitemap.xml            sitemap
//! /robots.txt             robots
//! /admin/api/…            admin JSON API, see [`admin`]
//! ```

pub mod admin;
pub mod health;
pub mod pages;
