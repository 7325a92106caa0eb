//! Subgraph query transport
//!
//! `QuerySource` is the seam the resolver depends on: anything that can run
//! a named query document with `{user, app}` variables and hand back the
//! result data. `SubgraphClient` is the production implementation over the
//! subgraph's HTTP endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ResolutionError;

/// Variables accompanying every completion query
#[derive(Debug, Clone, Serialize)]
pub struct QueryVariables {
    pub user: String,
    pub app: String,
}

/// A queryable source of completion records
#[async_trait]
pub trait QuerySource: Send + Sync {
    /// Run a query document and return the response `data` object
    async fn query(
        &self,
        document: &str,
        variables: &QueryVariables,
    ) -> Result<Value, ResolutionError>;
}

/// HTTP client for the subgraph query endpoint
pub struct SubgraphClient {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct GraphRequest<'a> {
    query: &'a str,
    variables: &'a QueryVariables,
}

impl SubgraphClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(&config.subgraph.endpoint, config.subgraph_timeout())
    }
}

#[async_trait]
impl QuerySource for SubgraphClient {
    async fn query(
        &self,
        document: &str,
        variables: &QueryVariables,
    ) -> Result<Value, ResolutionError> {
        debug!(user = %variables.user, app = %variables.app, "querying subgraph");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphRequest {
                query: document,
                variables,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!("subgraph returned status {}: {}", status, message);
            return Err(ResolutionError::Status { status, message });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ResolutionError::MalformedResponse(e.to_string()))?;

        // GraphQL-style endpoints report query failures in-band
        if let Some(errors) = body.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let message = errors
                    .iter()
                    .map(|e| {
                        e.get("message")
                            .and_then(Value::as_str)
                            .unwrap_or("unknown error")
                            .to_string()
                    })
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(ResolutionError::Graph(message));
            }
        }

        body.get("data")
            .cloned()
            .ok_or_else(|| ResolutionError::MalformedResponse("missing data object".to_string()))
    }
}
