//! Mock source for testing purposes.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::models::SearchQuery;
use crate::sources::{Source, SourceError};

/// A mock source for testing that returns predefined responses.
#[derive(Debug, Default)]
pub struct MockSource {
    response: Mutex<Option<Result<Vec<String>, String>>>,
}

impl MockSource {
    /// Create a new mock source.
    pub fn new() -> Self {
        Self {
            response: Mutex::new(None),
        }
    }

    /// Set the identifier list to return.
    pub fn set_ids(&self, ids: Vec<String>) {
        let mut guard = self.response.lock().unwrap();
        *guard = Some(Ok(ids));
    }

    /// Make the next search fail with an API error.
    pub fn set_error(&self, message: impl Into<String>) {
        let mut guard = self.response.lock().unwrap();
        *guard = Some(Err(message.into()));
    }

    /// Clear the configured response.
    pub fn clear_response(&self) {
        let mut guard = self.response.lock().unwrap();
        *guard = None;
    }
}

#[async_trait]
impl Source for MockSource {
    fn id(&self) -> &str {
        "mock"
    }

    fn name(&self) -> &str {
        "Mock Source"
    }

    async fn search(&self, _query: &SearchQuery) -> Result<Vec<String>, SourceError> {
        let guard = self.response.lock().unwrap();
        match &*guard {
            Some(Ok(ids)) => Ok(ids.clone()),
            Some(Err(message)) => Err(SourceError::Api(message.clone())),
            None => Ok(Vec::new()),
        }
    }
}
