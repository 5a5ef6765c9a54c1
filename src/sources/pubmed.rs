//! PubMed identifier retrieval using the E-utilities API.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::config::EutilsConfig;
use crate::models::SearchQuery;
use crate::sources::{Source, SourceError};
use crate::utils::HttpClient;

/// PubMed E-utilities esearch base URL
pub const PUBMED_ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";

/// PubMed identifier source
///
/// Uses the NCBI E-utilities esearch endpoint with `retmode=json` and returns
/// the PMID list from `esearchresult.idlist`. One request per search, no
/// retries.
#[derive(Debug, Clone)]
pub struct PubMedSource {
    client: Arc<HttpClient>,
    base_url: String,
    api_key: Option<String>,
}

impl PubMedSource {
    /// Create a new PubMed source against the production endpoint
    pub fn new() -> Result<Self, SourceError> {
        Ok(Self {
            client: Arc::new(HttpClient::new()?),
            base_url: PUBMED_ESEARCH_URL.to_string(),
            api_key: None,
        })
    }

    /// Create a source from configuration (custom endpoint, timeout, API key)
    pub fn from_config(config: &EutilsConfig) -> Result<Self, SourceError> {
        Ok(Self {
            client: Arc::new(HttpClient::with_timeout(config.timeout())?),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Create a source against a custom endpoint (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SourceError> {
        Ok(Self {
            client: Arc::new(HttpClient::new()?),
            base_url: base_url.into(),
            api_key: None,
        })
    }

    /// Build the esearch query string
    fn build_search_url(&self, query: &SearchQuery) -> String {
        let mut params = vec![
            ("db".to_string(), "pubmed".to_string()),
            ("term".to_string(), query.query.clone()),
            ("retmax".to_string(), query.max_results.to_string()),
            ("retmode".to_string(), "json".to_string()),
            ("tool".to_string(), env!("CARGO_PKG_NAME").to_string()),
        ];

        if let Some(api_key) = &self.api_key {
            params.push(("api_key".to_string(), api_key.clone()));
        }

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.base_url, query_string)
    }

    /// Parse the esearch JSON response into a PMID list
    fn parse_search_response(json: &str) -> Result<Vec<String>, SourceError> {
        #[derive(Debug, Deserialize)]
        struct ESearchResponse {
            esearchresult: Option<ESearchResult>,
        }

        #[derive(Debug, Deserialize)]
        struct ESearchResult {
            idlist: Option<Vec<String>>,
        }

        let response: ESearchResponse = serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("Failed to parse esearch JSON: {}", e)))?;

        response
            .esearchresult
            .and_then(|result| result.idlist)
            .ok_or_else(|| {
                SourceError::Parse("esearch response missing esearchresult.idlist".to_string())
            })
    }
}

#[async_trait]
impl Source for PubMedSource {
    fn id(&self) -> &str {
        "pubmed"
    }

    fn name(&self) -> &str {
        "PubMed"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<String>, SourceError> {
        let search_url = self.build_search_url(query);
        tracing::debug!(url = %search_url, "searching PubMed");

        let response = self
            .client
            .get(&search_url)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to search PubMed: {}", e)))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "PubMed API returned status: {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to read response: {}", e)))?;

        let ids = Self::parse_search_response(&body)?;
        tracing::debug!(count = ids.len(), "PubMed returned identifiers");

        Ok(ids)
    }
}
