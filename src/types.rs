//! Core data types: addresses, tenant scope, completion facts, reward payloads

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ResolutionError;

/// Wallet address, normalized to lowercase at construction.
///
/// All queries and comparisons use the normalized form, so mixed-case and
/// lowercase spellings of the same address behave identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ResolutionError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ResolutionError::EmptyAddress);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tenant (app) scope for subgraph queries.
///
/// Every query carries this identifier so one app's completions are never
/// visible to another. Lowercased once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantContext(String);

impl TenantContext {
    pub fn new(app_id: impl AsRef<str>) -> Self {
        Self(app_id.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One completed action or mission, as recorded by the subgraph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Stable identifier of the action/mission kind
    pub type_id: String,
    /// Subgraph entity id, when the query selects it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Completed actions and missions for one address
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completions {
    pub actions: BTreeSet<String>,
    pub missions: BTreeSet<String>,
}

/// Payload submitted to the reward API.
///
/// Field semantics are the backend's contract; this crate only serializes.
/// Validation of amounts and completion references is the caller's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardRequest {
    pub address: Address,
    pub reward_type: String,
    pub amount: u64,
    /// Which completed action/mission earned this reward
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_id: Option<String>,
}

/// The reward backend's success body, passed through unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewardConfirmation(pub serde_json::Value);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_normalization() {
        let mixed = Address::new("0xAbC123DeF").unwrap();
        let lower = Address::new("0xabc123def").unwrap();
        assert_eq!(mixed, lower);
        assert_eq!(mixed.as_str(), "0xabc123def");
    }

    #[test]
    fn test_address_rejects_empty() {
        assert!(matches!(
            Address::new(""),
            Err(ResolutionError::EmptyAddress)
        ));
        assert!(matches!(
            Address::new("   "),
            Err(ResolutionError::EmptyAddress)
        ));
    }

    #[test]
    fn test_tenant_context_lowercased() {
        let tenant = TenantContext::new("0xAPP");
        assert_eq!(tenant.as_str(), "0xapp");
    }

    #[test]
    fn test_reward_request_camel_case() {
        let request = RewardRequest {
            address: Address::new("0xabc...123").unwrap(),
            reward_type: "token".to_string(),
            amount: 10,
            completion_id: Some("quest_1".to_string()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["address"], "0xabc...123");
        assert_eq!(json["rewardType"], "token");
        assert_eq!(json["amount"], 10);
        assert_eq!(json["completionId"], "quest_1");
    }

    #[test]
    fn test_completion_record_tolerates_missing_id() {
        let record: CompletionRecord =
            serde_json::from_value(serde_json::json!({ "type_id": "quest_1" })).unwrap();
        assert_eq!(record.type_id, "quest_1");
        assert!(record.id.is_none());
    }
}
