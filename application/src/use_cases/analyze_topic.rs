//! Analyze Topic use case
//!
//! Turns a free-text question into [`BoardRequirements`] with one
//! completion call. Never fails: any problem degrades to
//! [`BoardRequirements::fallback`].

use crate::ports::completion::{CompletionError, CompletionService};
use panel_domain::core::string::truncate;
use panel_domain::{
    BoardRequirements, PromptTemplate, Question, RequirementsDecodeError, decode_requirements,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why requirement analysis fell back
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("completion failed: {0}")]
    Completion(#[from] CompletionError),

    #[error("completion timed out after {0}s")]
    Timeout(u64),

    #[error("could not decode requirements: {0}")]
    Decode(#[from] RequirementsDecodeError),
}

/// Use case for inferring board requirements from a question
pub struct AnalyzeTopicUseCase<C: CompletionService + ?Sized> {
    completion: Arc<C>,
    timeout: Option<Duration>,
}

impl<C: CompletionService + ?Sized> AnalyzeTopicUseCase<C> {
    pub fn new(completion: Arc<C>) -> Self {
        Self {
            completion,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Analyze the question, falling back to the fixed requirements on failure.
    pub async fn execute(&self, question: &Question) -> BoardRequirements {
        match self.try_analyze(question).await {
            Ok(requirements) => {
                info!(
                    "Requirements: domain={}, complexity={}, board size={}",
                    requirements.domain,
                    requirements.complexity,
                    requirements.suggested_board_size
                );
                requirements
            }
            Err(e) => {
                warn!("Requirement analysis fell back to defaults: {}", e);
                BoardRequirements::fallback()
            }
        }
    }

    /// Analyze the question, surfacing the reason for any failure.
    ///
    /// Makes exactly one completion call.
    pub async fn try_analyze(&self, question: &Question) -> Result<BoardRequirements, AnalysisError> {
        debug!("Analyzing question: {}", truncate(question.content(), 80));

        let prompt = PromptTemplate::analysis_prompt(question.content());
        let call = self
            .completion
            .complete(PromptTemplate::analysis_system(), &prompt);

        let text = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, call)
                .await
                .map_err(|_| AnalysisError::Timeout(timeout.as_secs()))??,
            None => call.await?,
        };

        Ok(decode_requirements(&text)?)
    }
}
