//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod analyze_topic;
pub mod compose_board;
pub mod consult_panel;
