//! Completion resolution
//!
//! Translates a wallet address into the distinct sets of action and mission
//! type identifiers the user has completed. Stateless; every call is one
//! scoped read against the injected query source.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::ResolutionError;
use crate::queries;
use crate::subgraph::{QuerySource, QueryVariables};
use crate::types::{Address, CompletionRecord, Completions, TenantContext};

/// Resolves completed actions and missions for an address
///
/// Actions and missions are separate completion domains (atomic events vs
/// multi-step goals) with an identical query shape, hence the two symmetric
/// entry points. An address with no history resolves to an empty set, not
/// an error.
pub struct CompletionResolver {
    source: Arc<dyn QuerySource>,
    tenant: TenantContext,
}

impl CompletionResolver {
    pub fn new(source: Arc<dyn QuerySource>, tenant: TenantContext) -> Self {
        Self { source, tenant }
    }

    /// Distinct type ids of all actions the address has completed
    pub async fn get_user_completed_actions(
        &self,
        address: &Address,
    ) -> Result<BTreeSet<String>, ResolutionError> {
        self.resolve(address, queries::ACTIONS_BY_USER_AND_APP, queries::ACTIONS_FIELD)
            .await
    }

    /// Distinct type ids of all missions the address has completed
    pub async fn get_user_completed_missions(
        &self,
        address: &Address,
    ) -> Result<BTreeSet<String>, ResolutionError> {
        self.resolve(address, queries::MISSIONS_BY_USER_AND_APP, queries::MISSIONS_FIELD)
            .await
    }

    /// Both domains at once; the two reads are independent and run concurrently
    pub async fn get_user_completions(
        &self,
        address: &Address,
    ) -> Result<Completions, ResolutionError> {
        let (actions, missions) = tokio::try_join!(
            self.get_user_completed_actions(address),
            self.get_user_completed_missions(address),
        )?;
        Ok(Completions { actions, missions })
    }

    async fn resolve(
        &self,
        address: &Address,
        document: &str,
        field: &str,
    ) -> Result<BTreeSet<String>, ResolutionError> {
        let variables = QueryVariables {
            user: address.as_str().to_string(),
            app: self.tenant.as_str().to_string(),
        };

        let data = self.source.query(document, &variables).await?;

        let records = data
            .get(field)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ResolutionError::MalformedResponse(format!("missing '{}' record list", field))
            })?;

        let mut type_ids = BTreeSet::new();
        for record in records {
            let record: CompletionRecord = serde_json::from_value(record.clone())
                .map_err(|e| ResolutionError::MalformedResponse(e.to_string()))?;
            type_ids.insert(record.type_id);
        }

        debug!(
            user = %address,
            field,
            count = type_ids.len(),
            "resolved completions"
        );
        Ok(type_ids)
    }
}
