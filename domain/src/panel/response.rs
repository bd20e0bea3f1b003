//! Public result of a panel consultation.

use super::agent::AgentDefinition;
use super::execution::{ExecutionOutputs, ExecutionResult, PanelMessage};
use super::expert::ExpertType;
use super::framework::Framework;
use serde::{Deserialize, Serialize};

/// Confidence reported for an expert when the engine supplies none
pub const DEFAULT_CONFIDENCE: f64 = 0.85;

/// One expert's contribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertResponse {
    #[serde(rename = "type")]
    pub expert_type: ExpertType,
    pub response: String,
    pub confidence: f64,
}

/// Consensus signal carried over from the engine
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConsensus {
    pub reached: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_recommendation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dissenting: Option<Vec<String>>,
}

/// Result of one consultation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelResponse {
    pub framework: Framework,
    pub experts: Vec<ExpertResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consensus: Option<PanelConsensus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_log: Option<Vec<PanelMessage>>,
}

impl PanelResponse {
    /// Map an engine reply onto the roster that produced it.
    ///
    /// `requested` is the framework token sent to the engine; it is used
    /// when the engine reports a framework name we do not recognize.
    pub fn from_execution(
        roster: &[AgentDefinition],
        requested: Framework,
        require_consensus: bool,
        result: ExecutionResult,
    ) -> Self {
        let framework = result.reported_framework().unwrap_or(requested);
        let experts = map_expert_responses(roster, &result.outputs);
        let consensus = aggregate_consensus(require_consensus, &result.outputs);
        let messages = result.outputs.messages;

        Self {
            framework,
            experts,
            consensus,
            conversation_log: (!messages.is_empty()).then_some(messages),
        }
    }

    pub fn consensus_reached(&self) -> bool {
        self.consensus.as_ref().is_some_and(|c| c.reached)
    }
}

/// One response per roster agent, in roster order.
///
/// An agent's response is its last message. Confidence falls back from the
/// message to the engine-level value to [`DEFAULT_CONFIDENCE`].
pub fn map_expert_responses(
    roster: &[AgentDefinition],
    outputs: &ExecutionOutputs,
) -> Vec<ExpertResponse> {
    roster
        .iter()
        .map(|agent| {
            let last = outputs.messages.iter().rev().find(|m| m.agent == agent.id);
            ExpertResponse {
                expert_type: agent.expert_type,
                response: last.map(|m| m.content.clone()).unwrap_or_default(),
                confidence: last
                    .and_then(|m| m.confidence)
                    .or(outputs.confidence)
                    .unwrap_or(DEFAULT_CONFIDENCE),
            }
        })
        .collect()
}

/// Consensus is present exactly when it was required.
pub fn aggregate_consensus(
    require_consensus: bool,
    outputs: &ExecutionOutputs,
) -> Option<PanelConsensus> {
    if !require_consensus {
        return None;
    }
    Some(PanelConsensus {
        reached: outputs.consensus_reached.unwrap_or(false),
        final_recommendation: outputs.recommendation.clone(),
        dissenting: outputs.dissenting.clone(),
    })
}
