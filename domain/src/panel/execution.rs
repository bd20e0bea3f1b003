//! Value objects exchanged with the external execution engine.

use super::framework::Framework;
use serde::{Deserialize, Serialize};

/// Caller identity reported to the engine when none is configured
pub const DEFAULT_SOURCE: &str = "expert-panel";

/// Options for a single engine invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOptions {
    pub mode: Framework,
    pub max_rounds: u32,
    pub require_consensus: bool,
    pub streaming: bool,
    pub source: String,
}

/// A message produced by one agent during execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelMessage {
    /// Id of the authoring agent
    pub agent: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl PanelMessage {
    pub fn new(agent: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            content: content.into(),
            round: None,
            confidence: None,
        }
    }

    pub fn with_round(mut self, round: u32) -> Self {
        self.round = Some(round);
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }
}

/// Raw outputs reported by the engine
///
/// Every field is optional on the wire so that a sparse reply still
/// decodes; gaps are defaulted during mapping.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutionOutputs {
    pub messages: Vec<PanelMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consensus_reached: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dissenting: Option<Vec<String>>,
}

/// Full engine reply
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExecutionResult {
    pub outputs: ExecutionOutputs,
    /// Framework the engine reports having used, free text
    pub framework: String,
}

impl ExecutionResult {
    /// The reported framework, if the engine used a recognizable name
    pub fn reported_framework(&self) -> Option<Framework> {
        self.framework.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_reply_decodes() {
        let result: ExecutionResult = serde_json::from_str(r#"{"outputs":{}}"#).unwrap();
        assert!(result.outputs.messages.is_empty());
        assert!(result.outputs.confidence.is_none());
        assert!(result.reported_framework().is_none());
    }

    #[test]
    fn test_full_reply_decodes() {
        let json = r#"{
            "outputs": {
                "messages": [{"agent": "ceo", "content": "Go", "round": 1, "confidence": 0.9}],
                "consensusReached": true,
                "recommendation": "File a De Novo",
                "dissenting": ["cfo"]
            },
            "framework": "conversational"
        }"#;
        let result: ExecutionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.outputs.messages[0].confidence, Some(0.9));
        assert_eq!(result.outputs.consensus_reached, Some(true));
        assert_eq!(result.reported_framework(), Some(Framework::Conversational));
    }

    #[test]
    fn test_options_wire_shape() {
        let options = ExecutionOptions {
            mode: Framework::TurnBased,
            max_rounds: 10,
            require_consensus: false,
            streaming: false,
            source: DEFAULT_SOURCE.to_string(),
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["mode"], "turn-based");
        assert_eq!(json["maxRounds"], 10);
        assert_eq!(json["streaming"], false);
    }
}
