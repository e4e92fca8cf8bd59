//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::audit::TracingAuditSink;
use crate::config::{CompanyMetadata, ConfigLoader};
use crate::payroll::PayrollEngine;
use crate::storage::InMemoryStore;

/// Shared application state.
///
/// Holds the payroll engine every handler delegates to, plus the company
/// metadata reported by the health check.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<PayrollEngine>,
    company: Arc<CompanyMetadata>,
}

impl AppState {
    /// Creates a state around an existing engine.
    pub fn new(engine: PayrollEngine, company: CompanyMetadata) -> Self {
        Self {
            engine: Arc::new(engine),
            company: Arc::new(company),
        }
    }

    /// Builds an in-memory engine seeded from the loaded configuration, with
    /// audit entries emitted through `tracing`.
    pub fn from_config(config: &ConfigLoader) -> Self {
        let store = Arc::new(InMemoryStore::from_config(config));
        let engine = PayrollEngine::new(store, Arc::new(TracingAuditSink));
        Self::new(engine, config.company().clone())
    }

    /// Returns the payroll engine.
    pub fn engine(&self) -> &PayrollEngine {
        &self.engine
    }

    /// Returns the configured company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        &self.company
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_from_config_exposes_company() {
        let config = ConfigLoader::load("./config/payroll").expect("Failed to load config");
        let state = AppState::from_config(&config);
        assert_eq!(state.company().currency, "USD");
        assert_eq!(
            state.engine().rate_config().hours_per_day,
            rust_decimal::Decimal::from(8)
        );
    }
}
