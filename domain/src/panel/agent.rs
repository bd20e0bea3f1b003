//! Execution-ready agent definitions built from expert templates.

use super::config::PanelConfig;
use super::expert::ExpertType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Model settings shared by every agent on a panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDefaults {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AgentDefaults {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

/// One agent as handed to the execution engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDefinition {
    /// Unique within a roster; engine messages refer back to it
    pub id: String,
    #[serde(rename = "type")]
    pub expert_type: ExpertType,
    pub role: String,
    pub goal: String,
    pub backstory: String,
    pub system_instruction: String,
    pub expertise: Vec<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub allow_delegation: bool,
}

impl AgentDefinition {
    pub fn from_template(
        id: impl Into<String>,
        expert_type: ExpertType,
        defaults: &AgentDefaults,
        allow_delegation: bool,
    ) -> Self {
        let template = expert_type.template();
        Self {
            id: id.into(),
            expert_type,
            role: template.role.to_string(),
            goal: template.goal.to_string(),
            backstory: template.backstory.to_string(),
            system_instruction: template.system_instruction.to_string(),
            expertise: template.expertise.iter().map(|s| s.to_string()).collect(),
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
            allow_delegation,
        }
    }
}

/// Build one agent per configured expert, preserving order.
///
/// Ids are the expert slug; repeated experts get `-2`, `-3`, ... suffixes.
pub fn build_roster(config: &PanelConfig, defaults: &AgentDefaults) -> Vec<AgentDefinition> {
    let allow_delegation = config.debate_allowed();
    let mut seen: HashMap<ExpertType, usize> = HashMap::new();

    config
        .experts
        .iter()
        .map(|expert| {
            let count = seen.entry(*expert).or_insert(0);
            *count += 1;
            let id = if *count == 1 {
                expert.slug().to_string()
            } else {
                format!("{}-{}", expert.slug(), count)
            };
            AgentDefinition::from_template(id, *expert, defaults, allow_delegation)
        })
        .collect()
}
