//! Server-side HTML rendering.
//!
//! - [`pages`] -- full visitor pages (home, project detail, blog, ...).
//! - [`previews`] -- small HTML fragments shown in admin list columns.
//!
//! Every interpolated value goes through [`escape`] except post bodies,
//! which are staff-authored rich text and rendered as-is.

pub mod pages;
pub mod previews;

use folio_core::html::escape;
use folio_core::storage::media_url;

/// Wrap page content in the shared document shell and navigation.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <nav>\n\
         <a href=\"/\">Portfolio</a>\n\
         <a href=\"/services/\">Services</a>\n\
         <a href=\"/blog/\">Blog</a>\n\
         <a href=\"/#contact\">Contact</a>\n\
         </nav>\n\
         <main>\n{body}</main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
    )
}

/// Escaped public URL of a stored media path, ready for an attribute.
pub(crate) fn media_src(path: &str) -> String {
    escape(&media_url(path))
}
