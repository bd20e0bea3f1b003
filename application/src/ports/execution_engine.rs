//! Execution engine port
//!
//! The multi-agent execution engine is a black box: it receives a roster,
//! a question and options, and returns per-agent messages plus consensus
//! signals. Adapters live in the infrastructure layer.

use async_trait::async_trait;
use panel_domain::{AgentDefinition, ExecutionOptions, ExecutionResult};
use thiserror::Error;

/// Errors reported by an execution engine adapter
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Engine returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid engine response: {0}")]
    InvalidResponse(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

/// Multi-agent execution engine
#[async_trait]
pub trait ExecutionEngine: Send + Sync {
    /// Run the roster against the question once.
    async fn execute(
        &self,
        agents: &[AgentDefinition],
        question: &str,
        options: &ExecutionOptions,
    ) -> Result<ExecutionResult, EngineError>;
}
