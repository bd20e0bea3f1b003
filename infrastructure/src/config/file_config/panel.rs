//! Panel defaults from TOML (`[panel]` section)

use panel_domain::AgentDefaults;
use panel_domain::panel::config::DEFAULT_MAX_ROUNDS;
use serde::{Deserialize, Serialize};

/// Raw panel configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePanelConfig {
    /// Rounds used when a consultation does not set its own bound
    pub default_max_rounds: u32,
    pub agent_temperature: f32,
    pub agent_max_tokens: u32,
}

impl Default for FilePanelConfig {
    fn default() -> Self {
        let agent = AgentDefaults::default();
        Self {
            default_max_rounds: DEFAULT_MAX_ROUNDS,
            agent_temperature: agent.temperature,
            agent_max_tokens: agent.max_tokens,
        }
    }
}

impl FilePanelConfig {
    pub fn agent_defaults(&self) -> AgentDefaults {
        AgentDefaults {
            temperature: self.agent_temperature,
            max_tokens: self.agent_max_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_domain() {
        let config = FilePanelConfig::default();
        assert_eq!(config.default_max_rounds, 10);
        assert_eq!(config.agent_defaults(), AgentDefaults::default());
    }
}
