//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod completion;
mod engine;
mod experts;
mod logging;
mod output;
mod panel;

pub use completion::FileCompletionConfig;
pub use engine::FileEngineConfig;
pub use experts::FileExpertConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use panel::FilePanelConfig;

use panel_application::PanelParams;
use panel_domain::ExpertProfile;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("{0}.timeout_seconds cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("completion.model cannot be empty")]
    EmptyModelName,

    #[error("engine.endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("panel.default_max_rounds cannot be 0")]
    ZeroRounds,

    #[error("expert entry is missing a name")]
    EmptyExpertName,

    #[error("expert '{0}' has no roles")]
    NoExpertRoles(String),

    #[error("expert '{expert}' has unknown role '{role}' (expected chair or expert)")]
    UnknownExpertRole { expert: String, role: String },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Requirement analysis LLM
    pub completion: FileCompletionConfig,
    /// Multi-agent execution engine
    pub engine: FileEngineConfig,
    /// Panel defaults
    pub panel: FilePanelConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
    /// Registry entries; the built-in catalog is used when empty
    pub experts: Vec<FileExpertConfig>,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.completion.timeout_seconds == Some(0) {
            issues.push(ConfigValidationError::InvalidTimeout("completion"));
        }
        if self.engine.timeout_seconds == Some(0) {
            issues.push(ConfigValidationError::InvalidTimeout("engine"));
        }
        if self.completion.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if self.engine.endpoint.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyEndpoint);
        }
        if self.panel.default_max_rounds == 0 {
            issues.push(ConfigValidationError::ZeroRounds);
        }

        issues.extend(self.experts.iter().filter_map(|e| e.to_profile().err()));
        issues
    }

    /// Convert to the parameters the application use cases apply.
    pub fn to_panel_params(&self) -> PanelParams {
        PanelParams::default()
            .with_completion_timeout(self.completion.timeout_seconds.map(Duration::from_secs))
            .with_engine_timeout(self.engine.timeout_seconds.map(Duration::from_secs))
            .with_agent_defaults(self.panel.agent_defaults())
            .with_source(self.engine.source.clone())
    }

    /// Configured registry entries, skipping invalid ones.
    pub fn expert_profiles(&self) -> Vec<ExpertProfile> {
        self.experts
            .iter()
            .filter_map(|e| e.to_profile().ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[completion]
model = "gpt-4o"
timeout_seconds = 30

[engine]
endpoint = "http://engine.internal/run"
source = "regulatory-portal"

[panel]
default_max_rounds = 6
agent_temperature = 0.4

[logging]
file = "/tmp/expert-panel.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.completion.model, "gpt-4o");
        assert_eq!(config.engine.endpoint, "http://engine.internal/run");
        assert_eq!(config.panel.default_max_rounds, 6);
        assert_eq!(config.panel.agent_max_tokens, 2000);
        assert!(config.logging.file.is_some());
        assert!(config.experts.is_empty());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert!(config.output.color);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let mut config = FileConfig::default();
        config.completion.timeout_seconds = Some(0);
        config.completion.model = String::new();
        config.panel.default_max_rounds = 0;
        config.experts.push(FileExpertConfig {
            name: String::new(),
            expertise: vec![],
            domains: vec![],
            roles: vec!["expert".to_string()],
        });

        let issues = config.validate();
        assert_eq!(
            issues,
            vec![
                ConfigValidationError::InvalidTimeout("completion"),
                ConfigValidationError::EmptyModelName,
                ConfigValidationError::ZeroRounds,
                ConfigValidationError::EmptyExpertName,
            ]
        );
    }

    #[test]
    fn test_to_panel_params() {
        let mut config = FileConfig::default();
        config.engine.timeout_seconds = None;
        config.engine.source = "portal".to_string();
        config.panel.agent_temperature = 0.3;

        let params = config.to_panel_params();
        assert_eq!(params.completion_timeout, Some(Duration::from_secs(60)));
        assert!(params.engine_timeout.is_none());
        assert_eq!(params.source, "portal");
        assert_eq!(params.agent_defaults.temperature, 0.3);
    }
}
