//! Progress reporting for board composition and panel consultation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use panel_application::{PanelProgressNotifier, Stage};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner per stage
pub struct ProgressReporter {
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            stage_bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn stage_display_name(stage: Stage) -> &'static str {
        match stage {
            Stage::Analysis => "Analyzing question",
            Stage::Selection => "Selecting board",
            Stage::Execution => "Consulting panel",
        }
    }

    fn stage_detail(stage: Stage, units: usize) -> String {
        match stage {
            Stage::Analysis => "asking the completion service...".to_string(),
            Stage::Selection => format!("scoring {} profiles...", units),
            Stage::Execution => format!("{} experts deliberating...", units),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: Stage, units: usize) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::stage_display_name(stage));
        pb.set_message(Self::stage_detail(stage, units));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.stage_bar.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        let Some(pb) = self.stage_bar.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        let status = if success {
            format!("{} {} done", "v".green(), stage)
        } else {
            format!("{} {} failed", "x".red(), stage)
        };
        pb.finish_with_message(status);
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl PanelProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: Stage, units: usize) {
        eprintln!(
            "{} {} ({})",
            "->".cyan(),
            ProgressReporter::stage_display_name(stage).bold(),
            ProgressReporter::stage_detail(stage, units)
        );
    }

    fn on_stage_complete(&self, stage: Stage, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), stage);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), stage);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names() {
        assert_eq!(
            ProgressReporter::stage_display_name(Stage::Execution),
            "Consulting panel"
        );
        assert_eq!(
            ProgressReporter::stage_detail(Stage::Selection, 11),
            "scoring 11 profiles..."
        );
    }

    #[test]
    fn test_complete_without_start_is_noop() {
        let reporter = ProgressReporter::new();
        reporter.on_stage_complete(Stage::Analysis, true);
        assert!(reporter.stage_bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_start_then_complete_clears_slot() {
        let reporter = ProgressReporter::new();
        reporter.on_stage_start(Stage::Analysis, 1);
        assert!(reporter.stage_bar.lock().unwrap().is_some());
        reporter.on_stage_complete(Stage::Analysis, true);
        assert!(reporter.stage_bar.lock().unwrap().is_none());
    }
}
