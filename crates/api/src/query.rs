//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Free-text search parameter (`?q=`) for admin list endpoints.
///
/// Blank values are treated as no search.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_is_ignored() {
        let params = SearchParams {
            q: Some("   ".into()),
        };
        assert_eq!(params.term(), None);
    }

    #[test]
    fn search_term_is_trimmed() {
        let params = SearchParams {
            q: Some(" acme ".into()),
        };
        assert_eq!(params.term(), Some("acme"));
    }
}
