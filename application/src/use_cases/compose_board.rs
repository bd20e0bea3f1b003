//! Compose Board use case
//!
//! Orchestrates the composition flow: requirement analysis, member
//! selection, role and weight assignment.

use crate::ports::completion::CompletionService;
use crate::ports::expert_registry::ExpertRegistry;
use crate::ports::progress::{NoProgress, PanelProgressNotifier, Stage};
use crate::use_cases::analyze_topic::AnalyzeTopicUseCase;
use panel_domain::{
    BoardRequirements, ComposedBoard, Question, assign_roles_and_weights, select_board_members,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Use case for composing an advisory board from a question
pub struct ComposeBoardUseCase<C, R>
where
    C: CompletionService + ?Sized,
    R: ExpertRegistry + ?Sized,
{
    analyzer: AnalyzeTopicUseCase<C>,
    registry: Arc<R>,
}

impl<C, R> ComposeBoardUseCase<C, R>
where
    C: CompletionService + ?Sized,
    R: ExpertRegistry + ?Sized,
{
    pub fn new(completion: Arc<C>, registry: Arc<R>) -> Self {
        Self {
            analyzer: AnalyzeTopicUseCase::new(completion),
            registry,
        }
    }

    pub fn with_analysis_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.analyzer = self.analyzer.with_timeout(timeout);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, question: &Question) -> ComposedBoard {
        self.execute_with_progress(question, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// An empty board is returned, not an error, when no profile matches.
    pub async fn execute_with_progress(
        &self,
        question: &Question,
        progress: &dyn PanelProgressNotifier,
    ) -> ComposedBoard {
        progress.on_stage_start(Stage::Analysis, 1);
        let requirements = self.analyzer.execute(question).await;
        progress.on_stage_complete(Stage::Analysis, true);

        progress.on_stage_start(Stage::Selection, self.registry.profiles().len());
        let board = self.compose_from_requirements(requirements);
        progress.on_stage_complete(Stage::Selection, !board.is_empty());

        board
    }

    /// Run selection and weighting for already-known requirements.
    pub fn compose_from_requirements(&self, requirements: BoardRequirements) -> ComposedBoard {
        let selected = select_board_members(&requirements, self.registry.profiles());
        let members = assign_roles_and_weights(&selected, &requirements);

        if members.is_empty() {
            warn!(
                "No expert profile matched domain '{}' or areas {:?}",
                requirements.domain, requirements.expertise_areas
            );
        } else {
            info!(
                "Selected {} of {} requested members",
                members.len(),
                requirements.suggested_board_size
            );
        }

        ComposedBoard::new(members, requirements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion::CompletionError;
    use async_trait::async_trait;
    use panel_domain::{BoardRole, ExpertProfile};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct FixedCompletion(String);

    #[async_trait]
    impl CompletionService for FixedCompletion {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, CompletionError> {
            Ok(self.0.clone())
        }
    }

    struct VecRegistry(Vec<ExpertProfile>);

    impl ExpertRegistry for VecRegistry {
        fn profiles(&self) -> &[ExpertProfile] {
            &self.0
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl PanelProgressNotifier for RecordingProgress {
        fn on_stage_start(&self, stage: Stage, units: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start:{}:{}", stage, units));
        }

        fn on_stage_complete(&self, stage: Stage, success: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done:{}:{}", stage, success));
        }
    }

    fn regulatory_reply() -> String {
        r#"{"domain":"regulatory","complexity":"medium","stakeholders":["regulators"],
            "expertiseAreas":["digital_health_policy"],"suggestedBoardSize":5,
            "recommendedFormat":"structured"}"#
            .to_string()
    }

    fn registry() -> VecRegistry {
        VecRegistry(vec![
            ExpertProfile::new(
                "FDA Regulatory Expert",
                ["fda_submissions", "510k", "de_novo"],
                ["regulatory"],
            )
            .with_chair(),
            ExpertProfile::new(
                "Market Access Strategist",
                ["pricing", "reimbursement"],
                ["market_access"],
            )
            .with_chair(),
        ])
    }

    #[tokio::test]
    async fn test_fda_scenario() {
        let use_case = ComposeBoardUseCase::new(
            Arc::new(FixedCompletion(regulatory_reply())),
            Arc::new(registry()),
        );

        let board = use_case
            .execute(&Question::new(
                "What FDA submission pathway applies to our digital therapeutic?",
            ))
            .await;

        assert_eq!(board.members.len(), 1);
        let chair = board.chair().unwrap();
        assert_eq!(chair.persona, "FDA Regulatory Expert");
        assert_eq!(chair.role, BoardRole::Chair);
        assert_eq!(chair.voting_weight, 1.5);
        assert!(
            board
                .members
                .iter()
                .all(|m| m.persona != "Market Access Strategist")
        );
    }

    #[tokio::test]
    async fn test_no_matching_profiles_gives_empty_board() {
        let registry = VecRegistry(vec![ExpertProfile::new(
            "Chef",
            ["cooking"],
            ["culinary"],
        )]);
        let use_case = ComposeBoardUseCase::new(
            Arc::new(FixedCompletion(regulatory_reply())),
            Arc::new(registry),
        );

        let board = use_case.execute(&Question::new("Which pathway?")).await;
        assert!(board.is_empty());
        assert_eq!(board.confidence, 0.0);
    }

    #[tokio::test]
    async fn test_non_json_analysis_uses_fallback_requirements() {
        let registry = VecRegistry(vec![
            ExpertProfile::new("Trialist", ["clinical_research"], ["clinical"]).with_chair(),
        ]);
        let use_case = ComposeBoardUseCase::new(
            Arc::new(FixedCompletion("not json at all".to_string())),
            Arc::new(registry),
        );

        let board = use_case.execute(&Question::new("Which pathway?")).await;
        assert_eq!(board.requirements, BoardRequirements::fallback());
        assert_eq!(board.members.len(), 1);
    }

    #[tokio::test]
    async fn test_board_respects_size_and_single_chair() {
        let profiles: Vec<ExpertProfile> = (0..10)
            .map(|i| {
                ExpertProfile::new(format!("Expert {}", i), ["fda_submissions"], ["regulatory"])
                    .with_chair()
            })
            .collect();
        let use_case = ComposeBoardUseCase::new(
            Arc::new(FixedCompletion(regulatory_reply())),
            Arc::new(VecRegistry(profiles)),
        );

        let board = use_case.execute(&Question::new("Which pathway?")).await;
        assert_eq!(board.members.len(), 5);
        assert_eq!(board.members.iter().filter(|m| m.is_chair()).count(), 1);
        for member in board.members.iter().filter(|m| !m.is_chair()) {
            assert!((1.0..=1.5).contains(&member.voting_weight));
        }
    }

    #[tokio::test]
    async fn test_progress_stages() {
        let use_case = ComposeBoardUseCase::new(
            Arc::new(FixedCompletion(regulatory_reply())),
            Arc::new(registry()),
        );
        let progress = RecordingProgress::default();

        use_case
            .execute_with_progress(&Question::new("Which pathway?"), &progress)
            .await;

        assert_eq!(
            *progress.events.lock().unwrap(),
            vec![
                "start:analysis:1",
                "done:analysis:true",
                "start:selection:2",
                "done:selection:true",
            ]
        );
    }
}
