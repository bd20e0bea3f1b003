//! Domain layer for expert-panel
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Board Composition
//!
//! A free-text question is turned into [`BoardRequirements`], which drive
//! selection and weighting of [`ExpertProfile`]s into a [`ComposedBoard`]:
//!
//! - **Chair**: the top-ranked member, if it may chair, with weight 1.5
//! - **Experts**: everyone else, weighted between 1.0 and 1.5
//!
//! ## Panel Execution
//!
//! A caller-supplied [`PanelConfig`] picks the experts and the
//! [`Framework`] (turn-based or conversational) used by the external
//! execution engine; its reply is mapped into a [`PanelResponse`].

pub mod board;
pub mod config;
pub mod core;
pub mod panel;
pub mod prompt;

// Re-export commonly used types
pub use board::{
    BoardFormat, BoardMemberConfig, BoardRequirements, BoardRole, ComposedBoard, Complexity,
    ExpertProfile, RequirementsDecodeError, assign_roles_and_weights, calculate_voting_weight,
    decode_requirements, select_board_members,
};
pub use config::OutputFormat;
pub use core::{error::DomainError, question::Question};
pub use panel::{
    AgentDefaults, AgentDefinition, ExecutionOptions, ExecutionOutputs, ExecutionResult,
    ExpertResponse, ExpertType, Framework, PanelConfig, PanelConsensus, PanelMessage, PanelMode,
    PanelResponse, UserGuidance, build_roster, select_framework,
};
pub use prompt::PromptTemplate;
