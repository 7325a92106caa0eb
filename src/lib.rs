//! Reward Service - resolve completed actions/missions and trigger reward payouts
//!
//! This crate is the reward-eligibility core of the quest application: it
//! resolves which actions and missions a wallet address has completed (from
//! the indexed subgraph) and submits reward issuance requests to the reward
//! API. Eligibility policy lives in the embedding application; this crate
//! supplies the completion facts and the submission mechanism.
//!
//! # How it works
//!
//! 1. The caller supplies a wallet address
//! 2. `CompletionResolver` queries the subgraph for completed actions and
//!    missions, scoped to the app's tenant context
//! 3. The caller decides eligibility and builds a `RewardRequest`
//! 4. `RewardTrigger` POSTs the request to the reward API (one attempt,
//!    not idempotent - dedup is the caller's job)
//!
//! All failures surface as `ResolutionError` or `TriggerError`; nothing is
//! retried or swallowed internally.

pub mod config;
pub mod error;
pub mod queries;
pub mod resolver;
pub mod subgraph;
pub mod trigger;
pub mod types;

pub use config::Config;
pub use error::{ResolutionError, TriggerError};
pub use resolver::CompletionResolver;
pub use subgraph::{QuerySource, QueryVariables, SubgraphClient};
pub use trigger::RewardTrigger;
pub use types::{
    Address, CompletionRecord, Completions, RewardConfirmation, RewardRequest, TenantContext,
};
