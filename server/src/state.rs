//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only the CRM forwarder, built once at startup and never mutated, so
//! requests share nothing writable.

use std::sync::Arc;

use crate::crm::LeadForward;

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Optional CRM forwarder. `None` if CRM env vars are not configured.
    pub crm: Option<Arc<dyn LeadForward>>,
}

impl AppState {
    #[must_use]
    pub fn new(crm: Option<Arc<dyn LeadForward>>) -> Self {
        Self { crm }
    }

    #[must_use]
    pub fn crm_configured(&self) -> bool {
        self.crm.is_some()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
