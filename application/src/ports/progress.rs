//! Progress notification port
//!
//! Defines the interface for reporting progress while composing and
//! consulting a panel.

use std::fmt;

/// Externally visible stage of a panel request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Requirement analysis (completion-service call)
    Analysis,
    /// Member selection and weighting
    Selection,
    /// Execution engine call
    Execution,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Analysis => "analysis",
            Stage::Selection => "selection",
            Stage::Execution => "execution",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Callback for progress updates
///
/// Implementations live in the presentation layer.
pub trait PanelProgressNotifier: Send + Sync {
    /// Called when a stage starts; `units` is the number of items it covers
    fn on_stage_start(&self, stage: Stage, units: usize);

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: Stage, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl PanelProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage, _units: usize) {}
    fn on_stage_complete(&self, _stage: Stage, _success: bool) {}
}
