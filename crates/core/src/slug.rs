//! Slug generation and validation for portfolio items and posts.
//!
//! Slugs are derived once from the title when a record is first saved and
//! are never regenerated afterwards, so published URLs stay stable when a
//! title is edited.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::CoreError;

/// Maximum slug length (matches the `slug` column constraint).
pub const MAX_SLUG_LENGTH: usize = 255;

/// Anything that is not a word character, whitespace or hyphen.
static STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

/// Runs of hyphens and/or whitespace.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// Convert a title into a URL-safe slug.
///
/// Characters are NFKD-decomposed so accented letters keep their base
/// letter, remaining non-ASCII is dropped, the result is lowercased,
/// punctuation other than `-` and `_` is removed, whitespace/hyphen runs
/// become a single hyphen, and leading/trailing hyphens and underscores are
/// trimmed. `"Hello, World!"` becomes `"hello-world"`.
pub fn slugify(title: &str) -> String {
    let ascii: String = title.nfkd().filter(char::is_ascii).collect();
    let lowered = ascii.to_lowercase();
    let stripped = STRIP_RE.replace_all(&lowered, "");
    let joined = SEPARATOR_RE.replace_all(&stripped, "-");
    joined.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Validate a slug: non-empty, at most [`MAX_SLUG_LENGTH`] characters, and
/// only lowercase ASCII letters, digits, hyphens and underscores.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LENGTH} characters"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase letters, digits, hyphens and underscores".into(),
        ));
    }
    Ok(())
}

/// Pick the slug for a record being created.
///
/// An explicit, non-blank slug is validated and used as-is; otherwise the
/// slug is derived from `title`. A title with no sluggable characters is a
/// validation error rather than an empty slug.
pub fn resolve_slug(explicit: Option<&str>, title: &str) -> Result<String, CoreError> {
    let slug = match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.to_string(),
        None => {
            let mut derived = slugify(title);
            derived.truncate(MAX_SLUG_LENGTH);
            let derived = derived.trim_end_matches(['-', '_']).to_string();
            if derived.is_empty() {
                return Err(CoreError::Validation(format!(
                    "Cannot derive a slug from title '{title}'; provide one explicitly"
                )));
            }
            derived
        }
    };
    validate_slug(&slug)?;
    Ok(slug)
}
