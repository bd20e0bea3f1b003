//! Panel execution domain
//!
//! Everything needed to run a configured panel through an external
//! execution engine, minus the engine call itself:
//!
//! - [`PanelConfig`] and [`select_framework`]: strategy selection
//! - [`ExpertType`] and [`build_roster`]: fixed templates to agents
//! - [`ExecutionOptions`] / [`ExecutionResult`]: engine contract values
//! - [`PanelResponse`]: mapped result, consensus included on request

pub mod agent;
pub mod config;
pub mod execution;
pub mod expert;
pub mod framework;
pub mod response;

pub use agent::{AgentDefaults, AgentDefinition, build_roster};
pub use config::{DEFAULT_MAX_ROUNDS, PanelConfig, PanelMode, UserGuidance};
pub use execution::{ExecutionOptions, ExecutionOutputs, ExecutionResult, PanelMessage};
pub use expert::{ExpertTemplate, ExpertType};
pub use framework::{Framework, select_framework};
pub use response::{
    DEFAULT_CONFIDENCE, ExpertResponse, PanelConsensus, PanelResponse, aggregate_consensus,
    map_expert_responses,
};
