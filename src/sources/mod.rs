//! Identifier retrieval sources.
//!
//! This module defines the [`Source`] trait the checker retrieves through.
//! [`PubMedSource`] is the production implementation; [`MockSource`] returns
//! canned responses for tests.

mod mock;
mod pubmed;

pub use mock::MockSource;
pub use pubmed::{PubMedSource, PUBMED_ESEARCH_URL};

use crate::models::SearchQuery;
use async_trait::async_trait;

/// Interface for a literature-search source that resolves a query to a list
/// of record identifiers.
#[async_trait]
pub trait Source: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source (e.g., "pubmed")
    fn id(&self) -> &str;

    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Run the query and return the identifiers the service reports,
    /// preserving the service's order. Does not deduplicate.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<String>, SourceError>;
}

/// Errors that can occur when interacting with a source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Parsing error (response body not in the expected shape)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// API error from the source (non-success status)
    #[error("API error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}
