//! HTTP execution engine adapter
//!
//! POSTs `{agents, question, options}` as JSON to a single endpoint and
//! decodes the engine's `{outputs, framework}` reply.

use async_trait::async_trait;
use panel_application::{EngineError, ExecutionEngine};
use panel_domain::{AgentDefinition, ExecutionOptions, ExecutionResult};
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::config::FileEngineConfig;

/// Execution engine reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpExecutionEngine {
    client: Client,
    endpoint: String,
}

impl HttpExecutionEngine {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &FileEngineConfig) -> Self {
        Self::new(&config.endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Debug, Serialize)]
struct ExecuteRequest<'a> {
    agents: &'a [AgentDefinition],
    question: &'a str,
    options: &'a ExecutionOptions,
}

fn decode_result(body: &str) -> Result<ExecutionResult, EngineError> {
    serde_json::from_str(body).map_err(|e| EngineError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl ExecutionEngine for HttpExecutionEngine {
    async fn execute(
        &self,
        agents: &[AgentDefinition],
        question: &str,
        options: &ExecutionOptions,
    ) -> Result<ExecutionResult, EngineError> {
        debug!(
            "Engine request: endpoint={}, agents={}, mode={}",
            self.endpoint,
            agents.len(),
            options.mode
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ExecuteRequest {
                agents,
                question,
                options,
            })
            .send()
            .await
            .map_err(|e| EngineError::ConnectionError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| EngineError::ConnectionError(e.to_string()))?;

        if !status.is_success() {
            return Err(EngineError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result = decode_result(&body)?;
        debug!(
            "Engine response: framework={}, messages={}",
            result.framework,
            result.outputs.messages.len()
        );
        Ok(result)
    }
}
