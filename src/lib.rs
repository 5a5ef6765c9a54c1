//! # PMID Checker
//!
//! Validate a PubMed search string by comparing the PMIDs it retrieves
//! against a known-good set of PMIDs.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (SearchQuery, ComparisonResult)
//! - [`sources`]: Identifier retrieval with a trait-based seam (PubMed, mock)
//! - [`checker`]: The request handler tying input, retrieval, and comparison
//! - [`utils`]: HTTP client and input normalization
//! - [`config`]: Configuration management
//! - [`ui`]: Terminal output formatting

pub mod checker;
pub mod config;
pub mod models;
pub mod sources;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use checker::{CheckError, CheckInput, CheckReport, Checker};
pub use models::{ComparisonResult, SearchQuery};
pub use sources::{PubMedSource, Source, SourceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
