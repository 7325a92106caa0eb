//! Error types for the reward core
//!
//! Both components propagate failures to the caller; neither retries nor
//! fabricates partial results.

use thiserror::Error;

/// Completion query could not be executed or its response interpreted
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// HTTP transport failed (includes client-side timeouts)
    #[error("subgraph request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The subgraph answered with a non-success status
    #[error("subgraph error {status}: {message}")]
    Status { status: u16, message: String },

    /// The subgraph reported query errors in its response body
    #[error("subgraph query error: {0}")]
    Graph(String),

    /// Response body was missing an expected field or had the wrong shape
    #[error("malformed subgraph response: {0}")]
    MalformedResponse(String),

    /// Address was empty after trimming
    #[error("address must be a non-empty string")]
    EmptyAddress,
}

/// Reward submission could not be completed
#[derive(Debug, Error)]
pub enum TriggerError {
    /// HTTP transport failed (includes client-side timeouts)
    #[error("reward API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The reward backend answered with a non-success status
    #[error("reward API failed with status {status}: {message}")]
    Backend { status: u16, message: String },

    /// The success body could not be read
    #[error("reward API returned an unreadable response: {0}")]
    InvalidResponse(String),
}
