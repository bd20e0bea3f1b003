//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod completion;
pub mod execution_engine;
pub mod expert_registry;
pub mod progress;
