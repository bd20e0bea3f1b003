//! Consult Panel use case
//!
//! Builds the agent roster for a [`PanelConfig`], invokes the execution
//! engine once and maps its reply into a [`PanelResponse`].

use crate::config::PanelParams;
use crate::ports::execution_engine::{EngineError, ExecutionEngine};
use crate::ports::progress::{NoProgress, PanelProgressNotifier, Stage};
use panel_domain::{
    AgentDefinition, ExecutionOptions, ExecutionResult, PanelConfig, PanelResponse,
    PromptTemplate, Question, build_roster, select_framework,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur during a consultation
///
/// No partial [`PanelResponse`] accompanies any of these.
#[derive(Error, Debug)]
pub enum PanelConsultationError {
    #[error("No experts configured for the panel")]
    NoExperts,

    #[error("Panel consultation failed: {message}")]
    ExecutionFailed {
        message: String,
        #[source]
        source: EngineError,
    },

    #[error("Panel consultation timed out after {0}s")]
    Timeout(u64),

    #[error("Panel consultation cancelled")]
    Cancelled,
}

impl From<EngineError> for PanelConsultationError {
    fn from(source: EngineError) -> Self {
        PanelConsultationError::ExecutionFailed {
            message: source.to_string(),
            source,
        }
    }
}

impl PanelConsultationError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PanelConsultationError::Cancelled)
    }
}

/// Input for the ConsultPanel use case
#[derive(Debug, Clone)]
pub struct ConsultPanelInput {
    pub question: Question,
    pub config: PanelConfig,
    /// Caller-supplied background, appended to the question
    pub context: BTreeMap<String, String>,
    pub cancellation_token: Option<CancellationToken>,
}

impl ConsultPanelInput {
    /// Build an input from an already validated question.
    pub fn new(question: Question, config: PanelConfig) -> Self {
        Self {
            question,
            config,
            context: BTreeMap::new(),
            cancellation_token: None,
        }
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    pub fn with_context_map(mut self, context: BTreeMap<String, String>) -> Self {
        self.context.extend(context);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }
}

/// Use case for running a configured panel through the execution engine
pub struct ConsultPanelUseCase<E: ExecutionEngine + ?Sized> {
    engine: Arc<E>,
    params: PanelParams,
}

impl<E: ExecutionEngine + ?Sized> ConsultPanelUseCase<E> {
    pub fn new(engine: Arc<E>, params: PanelParams) -> Self {
        Self { engine, params }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: ConsultPanelInput,
    ) -> Result<PanelResponse, PanelConsultationError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: ConsultPanelInput,
        progress: &dyn PanelProgressNotifier,
    ) -> Result<PanelResponse, PanelConsultationError> {
        let config = &input.config;
        if config.experts.is_empty() {
            return Err(PanelConsultationError::NoExperts);
        }

        let selected = select_framework(config);
        let mode = config.mode.execution_framework();
        info!(
            "Consulting panel of {} experts (mode: {}, executes as {}, strategy: {})",
            config.experts.len(),
            config.mode,
            mode,
            selected
        );

        let roster = build_roster(config, &self.params.agent_defaults);
        let options = ExecutionOptions {
            mode,
            max_rounds: config.effective_max_rounds(),
            require_consensus: config.consensus_required(),
            streaming: false,
            source: self.params.source.clone(),
        };
        let question = PromptTemplate::panel_question(input.question.content(), &input.context);
        debug!("Execution options: {:?}", options);

        progress.on_stage_start(Stage::Execution, roster.len());
        let result = self
            .invoke_engine(&roster, &question, &options, input.cancellation_token.as_ref())
            .await;
        progress.on_stage_complete(Stage::Execution, result.is_ok());

        let result = result.inspect_err(|e| warn!("Panel consultation failed: {}", e))?;
        let response =
            PanelResponse::from_execution(&roster, mode, options.require_consensus, result);

        info!(
            "Panel answered via {} ({} expert responses)",
            response.framework,
            response.experts.len()
        );
        Ok(response)
    }

    /// The single engine call, bounded by timeout and cancellation.
    async fn invoke_engine(
        &self,
        roster: &[AgentDefinition],
        question: &str,
        options: &ExecutionOptions,
        cancellation_token: Option<&CancellationToken>,
    ) -> Result<ExecutionResult, PanelConsultationError> {
        if let Some(token) = cancellation_token
            && token.is_cancelled()
        {
            return Err(PanelConsultationError::Cancelled);
        }

        let call = async {
            let execution = self.engine.execute(roster, question, options);
            match self.params.engine_timeout {
                Some(timeout) => tokio::time::timeout(timeout, execution)
                    .await
                    .map_err(|_| PanelConsultationError::Timeout(timeout.as_secs()))?
                    .map_err(PanelConsultationError::from),
                None => execution.await.map_err(PanelConsultationError::from),
            }
        };

        match cancellation_token {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Err(PanelConsultationError::Cancelled),
                result = call => result,
            },
            None => call.await,
        }
    }
}
