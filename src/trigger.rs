//! Reward submission
//!
//! One POST to the reward API per call. No retry and no idempotency key:
//! calling twice with the same request issues two reward attempts, so any
//! dedup (e.g. checking resolved completions first) belongs to the caller.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::TriggerError;
use crate::types::{RewardConfirmation, RewardRequest};

const REWARD_PATH: &str = "/api/reward";

/// Submits reward issuance requests to the reward API
pub struct RewardTrigger {
    client: reqwest::Client,
    base_url: String,
}

impl RewardTrigger {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(&config.rewards.base_url, config.rewards_timeout())
    }

    fn reward_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), REWARD_PATH)
    }

    /// Submit one reward request; the backend's success body is returned
    /// unchanged
    pub async fn trigger(
        &self,
        request: &RewardRequest,
    ) -> Result<RewardConfirmation, TriggerError> {
        let url = self.reward_url();
        debug!(address = %request.address, reward_type = %request.reward_type, "submitting reward");

        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!("reward API failed with status {}: {}", status, message);
            return Err(TriggerError::Backend { status, message });
        }

        let confirmation = response
            .json()
            .await
            .map_err(|e| TriggerError::InvalidResponse(e.to_string()))?;
        Ok(RewardConfirmation(confirmation))
    }
}
