//! Execution engine configuration from TOML (`[engine]` section)

use serde::{Deserialize, Serialize};

/// Raw execution engine configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEngineConfig {
    /// URL the roster, question and options are POSTed to
    pub endpoint: String,
    /// Timeout in seconds for one engine execution
    pub timeout_seconds: Option<u64>,
    /// Caller identity reported to the engine
    pub source: String,
}

impl Default for FileEngineConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000/execute".to_string(),
            timeout_seconds: Some(300),
            source: "expert-panel".to_string(),
        }
    }
}
