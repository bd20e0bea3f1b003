//! Execution framework selection.
//!
//! [`select_framework`] is a single ordered decision table over four
//! [`PanelConfig`] fields:
//!
//! | # | Condition                              | Framework      |
//! |---|----------------------------------------|----------------|
//! | 1 | mode is Collaborative                  | conversational |
//! | 2 | debate allowed and at least 3 experts  | conversational |
//! | 3 | user guidance is low                   | conversational |
//! | 4 | consensus required                     | conversational |
//! | 5 | otherwise                              | turn-based     |

use super::config::{PanelConfig, PanelMode, UserGuidance};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum panel size at which allowing debate switches to open discussion
pub const DEBATE_MIN_EXPERTS: usize = 3;

/// How the execution engine runs the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    /// Experts respond one at a time, each seeing prior responses
    TurnBased,
    /// Multi-round, interleaved discussion managed by the engine
    Conversational,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::TurnBased => "turn-based",
            Framework::Conversational => "conversational",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "turn-based" | "turnbased" | "sequential" => Ok(Framework::TurnBased),
            "conversational" | "conversation" => Ok(Framework::Conversational),
            _ => Err(format!("Unknown framework: {}", s)),
        }
    }
}

/// Choose the framework for a panel configuration; first matching rule wins.
pub fn select_framework(config: &PanelConfig) -> Framework {
    if config.mode == PanelMode::Collaborative {
        return Framework::Conversational;
    }
    if config.allow_debate == Some(true) && config.experts.len() >= DEBATE_MIN_EXPERTS {
        return Framework::Conversational;
    }
    if config.user_guidance == Some(UserGuidance::Low) {
        return Framework::Conversational;
    }
    if config.require_consensus == Some(true) {
        return Framework::Conversational;
    }
    Framework::TurnBased
}
