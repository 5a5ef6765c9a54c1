//! The check request handler.
//!
//! [`Checker`] is the boundary between presentation and logic: it takes the
//! raw form input ([`CheckInput`]), enforces the input preconditions, drives
//! one retrieval and one comparison, and returns a render-ready
//! [`CheckReport`]. It knows nothing about terminals or output formats.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::Config;
use crate::models::{ComparisonResult, SearchQuery};
use crate::sources::{PubMedSource, Source, SourceError};
use crate::utils::parse_id_list;

/// Raw form input for one check: the query text and the comma-separated
/// known-identifier text, both exactly as the user submitted them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInput {
    /// Search query text
    pub query: String,

    /// Comma-separated known identifiers
    pub known_ids: String,

    /// Override for the maximum-results bound
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl CheckInput {
    /// Create a check input from the two form fields
    pub fn new(query: impl Into<String>, known_ids: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            known_ids: known_ids.into(),
            max_results: None,
        }
    }

    /// Set the maximum-results bound
    pub fn max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }
}

/// Render-ready result of one check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// The query that was executed, echoed back
    pub query: String,

    /// Number of identifiers the search retrieved (before deduplication)
    pub retrieved_count: usize,

    /// Found/missed breakdown against the known set
    pub comparison: ComparisonResult,
}

/// Errors surfaced to the user by a check
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// A form field was empty at submission time; no network call was made
    #[error("{0}")]
    Input(String),

    /// The retrieval against the search service failed
    #[error("Retrieval failed: {0}")]
    Retrieval(#[from] SourceError),
}

/// Runs checks against a single identifier source.
#[derive(Debug, Clone)]
pub struct Checker {
    source: Arc<dyn Source>,
    default_max_results: usize,
}

impl Checker {
    /// Create a checker backed by PubMed, using the given configuration
    pub fn new(config: &Config) -> Result<Self, SourceError> {
        Ok(Self {
            source: Arc::new(PubMedSource::from_config(&config.eutils)?),
            default_max_results: config.eutils.default_max_results,
        })
    }

    /// Create a checker over an arbitrary source (used by tests)
    pub fn with_source(source: Arc<dyn Source>, default_max_results: usize) -> Self {
        Self {
            source,
            default_max_results,
        }
    }

    /// The source this checker retrieves through
    pub fn source(&self) -> &dyn Source {
        self.source.as_ref()
    }

    /// Run one check: validate the input, retrieve, compare.
    ///
    /// Input validation happens before any network call. The retrieved list
    /// is passed to the comparison as reported by the service; the
    /// comparison deduplicates.
    pub async fn run(&self, input: &CheckInput) -> Result<CheckReport, CheckError> {
        let query = input.query.trim();
        if query.is_empty() {
            return Err(CheckError::Input(
                "Please provide a search query.".to_string(),
            ));
        }

        let known = parse_id_list(&input.known_ids);
        if known.is_empty() {
            return Err(CheckError::Input(
                "Please provide at least one known identifier.".to_string(),
            ));
        }

        let max_results = input.max_results.unwrap_or(self.default_max_results);
        if max_results == 0 {
            return Err(CheckError::Input(
                "Maximum results must be a positive integer.".to_string(),
            ));
        }

        let search_query = SearchQuery::new(query).max_results(max_results);

        tracing::info!(
            source = self.source.id(),
            known = known.len(),
            "running search check"
        );
        let retrieved = self.source.search(&search_query).await?;

        let comparison = ComparisonResult::new(&retrieved, &known);
        tracing::info!(
            retrieved = retrieved.len(),
            found = comparison.found_count,
            missed = comparison.missed_count,
            "check complete"
        );

        Ok(CheckReport {
            query: query.to_string(),
            retrieved_count: retrieved.len(),
            comparison,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::MockSource;

    fn mock_checker(source: MockSource) -> Checker {
        Checker::with_source(Arc::new(source), 1000)
    }

    #[tokio::test]
    async fn test_run_empty_query_is_input_error() {
        let source = MockSource::new();
        source.set_error("must not be called");
        let checker = mock_checker(source);

        let err = checker
            .run(&CheckInput::new("", "123,456"))
            .await
            .unwrap_err();

        // Rejected before the source is consulted
        assert!(matches!(err, CheckError::Input(_)));
    }

    #[tokio::test]
    async fn test_run_whitespace_query_is_input_error() {
        let source = MockSource::new();
        source.set_error("must not be called");
        let checker = mock_checker(source);

        let err = checker
            .run(&CheckInput::new("   ", "123"))
            .await
            .unwrap_err();

        assert!(matches!(err, CheckError::Input(_)));
    }

    #[tokio::test]
    async fn test_run_empty_known_ids_is_input_error() {
        let source = MockSource::new();
        source.set_error("must not be called");
        let checker = mock_checker(source);

        let err = checker
            .run(&CheckInput::new("cancer", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, CheckError::Input(_)));

        // Tokens that normalize away entirely count as empty too
        let err = checker
            .run(&CheckInput::new("cancer", " , ,, "))
            .await
            .unwrap_err();

        assert!(matches!(err, CheckError::Input(_)));
    }

    #[tokio::test]
    async fn test_run_zero_max_results_is_input_error() {
        let source = MockSource::new();
        source.set_error("must not be called");
        let checker = mock_checker(source);

        let err = checker
            .run(&CheckInput::new("cancer", "123").max_results(0))
            .await
            .unwrap_err();

        assert!(matches!(err, CheckError::Input(_)));
    }

    #[tokio::test]
    async fn test_run_compares_retrieved_against_known() {
        let source = MockSource::new();
        source.set_ids(vec![
            "100".to_string(),
            "200".to_string(),
            "300".to_string(),
        ]);
        let checker = mock_checker(source);

        let report = checker
            .run(&CheckInput::new("cancer", "100, 400"))
            .await
            .unwrap();

        assert_eq!(report.query, "cancer");
        assert_eq!(report.retrieved_count, 3);
        assert_eq!(report.comparison.total_known, 2);
        assert_eq!(report.comparison.found, vec!["100"]);
        assert_eq!(report.comparison.missed, vec!["400"]);
    }

    #[tokio::test]
    async fn test_run_propagates_retrieval_error() {
        let source = MockSource::new();
        source.set_error("PubMed API returned status: 500 Internal Server Error");
        let checker = mock_checker(source);

        let err = checker
            .run(&CheckInput::new("cancer", "123"))
            .await
            .unwrap_err();

        assert!(matches!(err, CheckError::Retrieval(_)));
        assert!(err.to_string().contains("500"));
    }
}
