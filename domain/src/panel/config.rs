//! Caller-supplied configuration for a panel consultation.

use super::expert::ExpertType;
use super::framework::Framework;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default bound on engine rounds when the caller sets none
pub const DEFAULT_MAX_ROUNDS: u32 = 10;

/// How the panel should be run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PanelMode {
    /// Experts answer one after another
    #[default]
    Sequential,
    /// Experts discuss openly
    Collaborative,
    /// Mixed; executed conversationally
    Hybrid,
}

impl PanelMode {
    /// Execution token sent to the engine.
    ///
    /// Sequential runs turn-based; Collaborative and Hybrid run
    /// conversationally.
    pub fn execution_framework(&self) -> Framework {
        match self {
            PanelMode::Sequential => Framework::TurnBased,
            PanelMode::Collaborative | PanelMode::Hybrid => Framework::Conversational,
        }
    }
}

impl fmt::Display for PanelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelMode::Sequential => write!(f, "sequential"),
            PanelMode::Collaborative => write!(f, "collaborative"),
            PanelMode::Hybrid => write!(f, "hybrid"),
        }
    }
}

impl std::str::FromStr for PanelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" | "seq" => Ok(PanelMode::Sequential),
            "collaborative" | "collab" => Ok(PanelMode::Collaborative),
            "hybrid" => Ok(PanelMode::Hybrid),
            _ => Err(format!(
                "Invalid panel mode: {}. Valid: sequential, collaborative, hybrid",
                s
            )),
        }
    }
}

/// How much steering the user intends to give the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserGuidance {
    High,
    Medium,
    Low,
}

impl fmt::Display for UserGuidance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserGuidance::High => write!(f, "high"),
            UserGuidance::Medium => write!(f, "medium"),
            UserGuidance::Low => write!(f, "low"),
        }
    }
}

impl std::str::FromStr for UserGuidance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(UserGuidance::High),
            "medium" => Ok(UserGuidance::Medium),
            "low" => Ok(UserGuidance::Low),
            _ => Err(format!("Invalid user guidance: {}. Valid: high, medium, low", s)),
        }
    }
}

/// Execution configuration for one consultation
///
/// Independent of any composed board; the same config may be reused.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    pub mode: PanelMode,
    pub experts: Vec<ExpertType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rounds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_debate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_consensus: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_guidance: Option<UserGuidance>,
}

impl PanelConfig {
    pub fn new(mode: PanelMode, experts: impl IntoIterator<Item = ExpertType>) -> Self {
        Self {
            mode,
            experts: experts.into_iter().collect(),
            ..Default::default()
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    pub fn with_allow_debate(mut self, allow: bool) -> Self {
        self.allow_debate = Some(allow);
        self
    }

    pub fn with_require_consensus(mut self, require: bool) -> Self {
        self.require_consensus = Some(require);
        self
    }

    pub fn with_user_guidance(mut self, guidance: UserGuidance) -> Self {
        self.user_guidance = Some(guidance);
        self
    }

    // ==================== Resolved Values ====================

    pub fn effective_max_rounds(&self) -> u32 {
        self.max_rounds.unwrap_or(DEFAULT_MAX_ROUNDS)
    }

    pub fn debate_allowed(&self) -> bool {
        self.allow_debate.unwrap_or(false)
    }

    pub fn consensus_required(&self) -> bool {
        self.require_consensus.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_framework() {
        assert_eq!(
            PanelMode::Sequential.execution_framework(),
            Framework::TurnBased
        );
        assert_eq!(
            PanelMode::Collaborative.execution_framework(),
            Framework::Conversational
        );
        assert_eq!(
            PanelMode::Hybrid.execution_framework(),
            Framework::Conversational
        );
    }

    #[test]
    fn test_defaults() {
        let config = PanelConfig::new(PanelMode::Sequential, [ExpertType::Ceo]);
        assert_eq!(config.effective_max_rounds(), 10);
        assert!(!config.debate_allowed());
        assert!(!config.consensus_required());
        assert!(config.user_guidance.is_none());
    }

    #[test]
    fn test_builder() {
        let config = PanelConfig::new(PanelMode::Hybrid, [ExpertType::Ceo, ExpertType::Cfo])
            .with_max_rounds(3)
            .with_allow_debate(true)
            .with_require_consensus(true)
            .with_user_guidance(UserGuidance::Low);

        assert_eq!(config.effective_max_rounds(), 3);
        assert!(config.debate_allowed());
        assert!(config.consensus_required());
        assert_eq!(config.user_guidance, Some(UserGuidance::Low));
    }

    #[test]
    fn test_deserialize_minimal() {
        let config: PanelConfig =
            serde_json::from_str(r#"{"mode":"Collaborative","experts":["CEO","CMO"]}"#).unwrap();
        assert_eq!(config.mode, PanelMode::Collaborative);
        assert_eq!(config.experts, vec![ExpertType::Ceo, ExpertType::Cmo]);
        assert!(config.max_rounds.is_none());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("sequential".parse::<PanelMode>().ok(), Some(PanelMode::Sequential));
        assert_eq!("Collab".parse::<PanelMode>().ok(), Some(PanelMode::Collaborative));
        assert_eq!("hybrid".parse::<PanelMode>().ok(), Some(PanelMode::Hybrid));
        assert!("parallel".parse::<PanelMode>().is_err());
    }

    #[test]
    fn test_guidance_from_str() {
        assert_eq!("LOW".parse::<UserGuidance>().ok(), Some(UserGuidance::Low));
        assert!("none".parse::<UserGuidance>().is_err());
    }
}
