//! Application layer for expert-panel
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod service;
pub mod use_cases;

// Re-export commonly used types
pub use config::PanelParams;
pub use ports::{
    completion::{CompletionError, CompletionService},
    execution_engine::{EngineError, ExecutionEngine},
    expert_registry::ExpertRegistry,
    progress::{NoProgress, PanelProgressNotifier, Stage},
};
pub use service::PanelService;
pub use use_cases::analyze_topic::{AnalysisError, AnalyzeTopicUseCase};
pub use use_cases::compose_board::ComposeBoardUseCase;
pub use use_cases::consult_panel::{
    ConsultPanelInput, ConsultPanelUseCase, PanelConsultationError,
};
