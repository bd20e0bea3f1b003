//! Panel service facade
//!
//! [`PanelService`] bundles the two public operations behind one handle so
//! callers wire the adapters once. It holds no per-request state.

use crate::config::PanelParams;
use crate::ports::completion::CompletionService;
use crate::ports::execution_engine::ExecutionEngine;
use crate::ports::expert_registry::ExpertRegistry;
use crate::ports::progress::{NoProgress, PanelProgressNotifier};
use crate::use_cases::compose_board::ComposeBoardUseCase;
use crate::use_cases::consult_panel::{
    ConsultPanelInput, ConsultPanelUseCase, PanelConsultationError,
};
use panel_domain::{ComposedBoard, PanelResponse, Question};
use std::sync::Arc;

pub struct PanelService<C, R, E>
where
    C: CompletionService + ?Sized,
    R: ExpertRegistry + ?Sized,
    E: ExecutionEngine + ?Sized,
{
    composer: ComposeBoardUseCase<C, R>,
    consultant: ConsultPanelUseCase<E>,
}

impl<C, R, E> PanelService<C, R, E>
where
    C: CompletionService + ?Sized,
    R: ExpertRegistry + ?Sized,
    E: ExecutionEngine + ?Sized,
{
    pub fn new(completion: Arc<C>, registry: Arc<R>, engine: Arc<E>, params: PanelParams) -> Self {
        let composer = ComposeBoardUseCase::new(completion, registry)
            .with_analysis_timeout(params.completion_timeout);
        Self {
            composer,
            consultant: ConsultPanelUseCase::new(engine, params),
        }
    }

    /// Compose an advisory board for `question`. Never fails.
    pub async fn compose_board(&self, question: &Question) -> ComposedBoard {
        self.composer.execute(question).await
    }

    pub async fn compose_board_with_progress(
        &self,
        question: &Question,
        progress: &dyn PanelProgressNotifier,
    ) -> ComposedBoard {
        self.composer.execute_with_progress(question, progress).await
    }

    /// Run a configured panel through the execution engine.
    pub async fn consult_panel(
        &self,
        input: ConsultPanelInput,
    ) -> Result<PanelResponse, PanelConsultationError> {
        self.consult_panel_with_progress(input, &NoProgress).await
    }

    pub async fn consult_panel_with_progress(
        &self,
        input: ConsultPanelInput,
        progress: &dyn PanelProgressNotifier,
    ) -> Result<PanelResponse, PanelConsultationError> {
        self.consultant.execute_with_progress(input, progress).await
    }
}
