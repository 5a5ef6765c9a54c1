//! Search request model.

use serde::{Deserialize, Serialize};

/// Default bound on the single result fetch
pub const DEFAULT_MAX_RESULTS: usize = 1000;

/// Search query parameters
///
/// The query string is in the service's own syntax and is treated as opaque
/// text; nothing here parses or validates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Main search query string
    pub query: String,

    /// Maximum number of identifiers to request in the single fetch
    pub max_results: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchQuery {
    /// Create a new search query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Set maximum results
    pub fn max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_builder() {
        let query = SearchQuery::new("cancer AND screening").max_results(50);

        assert_eq!(query.query, "cancer AND screening");
        assert_eq!(query.max_results, 50);
    }

    #[test]
    fn test_search_query_default_max() {
        let query = SearchQuery::new("cancer");
        assert_eq!(query.max_results, DEFAULT_MAX_RESULTS);
    }
}
