//! Backend connection lifecycle and credit-gated operations.
//!
//! The backend itself (auth, profile storage, AI functions) lives outside this
//! crate. What lives here is the client-side contract around it: an explicit
//! context that is initialized and torn down by the host instead of a module
//! global, and a gate that refuses paid operations the balance cannot cover
//! and only charges once the operation has succeeded.

#[cfg(test)]
#[path = "credits_test.rs"]
mod credits_test;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::CreditError;

/// Region hosting the backend's callable functions.
pub const DEFAULT_FUNCTIONS_REGION: &str = "asia-east1";

fn default_functions_region() -> String {
    DEFAULT_FUNCTIONS_REGION.to_owned()
}

/// Connection settings for the hosted backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    #[serde(default = "default_functions_region")]
    pub functions_region: String,
}

impl BackendConfig {
    /// The fields the backend cannot connect without are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.project_id.trim().is_empty()
    }
}

/// Live backend connection, owned by the host and passed to whoever needs it.
#[derive(Debug, Default)]
pub struct BackendContext {
    config: Option<BackendConfig>,
}

impl BackendContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect with `config`, replacing any previous connection.
    ///
    /// # Errors
    ///
    /// [`CreditError::NotConnected`] if `config` lacks an API key or project id;
    /// the context is left as it was.
    pub fn initialize(&mut self, config: BackendConfig) -> Result<(), CreditError> {
        if !config.is_complete() {
            log::warn!("backend config incomplete, staying disconnected");
            return Err(CreditError::NotConnected);
        }
        log::info!("backend initialized for project {}", config.project_id);
        self.config = Some(config);
        Ok(())
    }

    /// Drop the connection. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(config) = self.config.take() {
            log::info!("backend torn down for project {}", config.project_id);
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.config.is_some()
    }

    #[must_use]
    pub fn config(&self) -> Option<&BackendConfig> {
        self.config.as_ref()
    }
}

/// Result of a charged operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charged<T> {
    pub value: T,
    /// Balance after the charge.
    pub balance: u32,
}

/// Runs paid operations against a [`BackendContext`].
pub struct CreditGate<'a> {
    backend: &'a BackendContext,
}

impl<'a> CreditGate<'a> {
    #[must_use]
    pub fn new(backend: &'a BackendContext) -> Self {
        Self { backend }
    }

    /// Run `op` if `balance` covers `cost`, and charge only if it succeeds.
    ///
    /// `op` is never called when the backend is down or the balance is short.
    ///
    /// # Errors
    ///
    /// [`CreditError::NotConnected`] without a backend,
    /// [`CreditError::Insufficient`] when `balance < cost`, and whatever `op`
    /// returns on failure (nothing is charged).
    pub async fn run<T, F, Fut>(&self, balance: u32, cost: u32, op: F) -> Result<Charged<T>, CreditError>
    where
        F: FnOnce(&'a BackendConfig) -> Fut,
        Fut: Future<Output = Result<T, CreditError>>,
    {
        let config = self.backend.config().ok_or(CreditError::NotConnected)?;
        if balance < cost {
            return Err(CreditError::Insufficient { needed: cost, available: balance });
        }

        let value = op(config).await?;
        let balance = balance.saturating_sub(cost);
        log::debug!("charged {cost} credits, {balance} left");
        Ok(Charged { value, balance })
    }
}
