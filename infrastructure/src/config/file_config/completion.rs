//! Completion service configuration from TOML (`[completion]` section)

use serde::{Deserialize, Serialize};

/// Raw completion service configuration from TOML
///
/// Any OpenAI-compatible `/chat/completions` endpoint works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCompletionConfig {
    /// API base URL, without the `/chat/completions` suffix
    pub base_url: String,
    /// Model used for requirement analysis
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Timeout in seconds for the analysis call
    pub timeout_seconds: Option<u64>,
}

impl Default for FileCompletionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: 0.2,
            max_tokens: 1000,
            timeout_seconds: Some(60),
        }
    }
}
