//! Panel parameters: static settings for the panel use cases.
//!
//! [`PanelParams`] groups the bounds and defaults the use cases apply to
//! every request. Per-request choices live in
//! [`PanelConfig`](panel_domain::PanelConfig).

use panel_domain::AgentDefaults;
use panel_domain::panel::execution::DEFAULT_SOURCE;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelParams {
    /// Bound on the requirement analysis completion call.
    pub completion_timeout: Option<Duration>,
    /// Bound on the execution engine call.
    pub engine_timeout: Option<Duration>,
    /// Temperature and token budget shared by every agent.
    pub agent_defaults: AgentDefaults,
    /// Caller identity reported to the engine.
    pub source: String,
}

impl Default for PanelParams {
    fn default() -> Self {
        Self {
            completion_timeout: Some(Duration::from_secs(60)),
            engine_timeout: Some(Duration::from_secs(300)),
            agent_defaults: AgentDefaults::default(),
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}

impl PanelParams {
    // ==================== Builder Methods ====================

    pub fn with_completion_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.completion_timeout = timeout;
        self
    }

    pub fn with_engine_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.engine_timeout = timeout;
        self
    }

    pub fn with_agent_defaults(mut self, defaults: AgentDefaults) -> Self {
        self.agent_defaults = defaults;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = PanelParams::default();
        assert_eq!(params.completion_timeout, Some(Duration::from_secs(60)));
        assert_eq!(params.engine_timeout, Some(Duration::from_secs(300)));
        assert_eq!(params.source, "expert-panel");
    }

    #[test]
    fn test_builder() {
        let params = PanelParams::default()
            .with_engine_timeout(None)
            .with_source("regulatory-portal");

        assert!(params.engine_timeout.is_none());
        assert_eq!(params.source, "regulatory-portal");
    }
}
