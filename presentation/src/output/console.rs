//! Console output formatter for boards and panel responses

use colored::Colorize;
use panel_domain::{ComposedBoard, PanelResponse};
use serde::Serialize;

/// Formats composition and consultation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Enable or disable ANSI colors for everything formatted afterwards
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Format a composed board
    pub fn format_board(question: &str, board: &ComposedBoard) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&board.name));
        output.push('\n');

        output.push_str(&format!("{} {}\n\n", "Question:".cyan().bold(), question));

        let req = &board.requirements;
        output.push_str(&Self::section_header("Requirements"));
        output.push_str(&format!("  {} {}\n", "Domain:".bold(), req.domain));
        output.push_str(&format!("  {} {}\n", "Complexity:".bold(), req.complexity));
        output.push_str(&format!(
            "  {} {}\n",
            "Expertise:".bold(),
            req.expertise_areas.join(", ")
        ));
        if !req.stakeholders.is_empty() {
            output.push_str(&format!(
                "  {} {}\n",
                "Stakeholders:".bold(),
                req.stakeholders.join(", ")
            ));
        }
        output.push_str(&format!(
            "  {} {} ({} seats)\n",
            "Format:".bold(),
            req.recommended_format,
            req.suggested_board_size
        ));

        output.push_str(&Self::section_header("Members"));
        if board.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                "No registered expert matches these requirements.".yellow()
            ));
        }
        for member in &board.members {
            let title = format!(
                "── {} ({}, weight {:.2}) ──",
                member.persona, member.role, member.voting_weight
            );
            let title = if member.is_chair() {
                title.green().bold()
            } else {
                title.yellow().bold()
            };
            output.push_str(&format!("\n{}\n{}\n", title, member.rationale));
        }

        output.push_str(&format!(
            "\n{} {:.2}\n",
            "Confidence:".cyan().bold(),
            board.confidence
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format a panel response
    pub fn format_response(question: &str, response: &PanelResponse) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Expert Panel Results"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Question:".cyan().bold(), question));
        output.push_str(&format!(
            "{} {}\n",
            "Framework:".cyan().bold(),
            response.framework
        ));

        output.push_str(&Self::section_header("Expert Responses"));
        for expert in &response.experts {
            let title = format!(
                "── {} (confidence {:.2}) ──",
                expert.expert_type, expert.confidence
            );
            let body = if expert.response.is_empty() {
                "(no response)".dimmed().to_string()
            } else {
                expert.response.clone()
            };
            output.push_str(&format!("\n{}\n{}\n", title.yellow().bold(), body));
        }

        if let Some(consensus) = &response.consensus {
            output.push_str(&Self::section_header("Consensus"));
            let verdict = if consensus.reached {
                "Reached".green().bold()
            } else {
                "Not reached".red().bold()
            };
            output.push_str(&format!("\n{}\n", verdict));
            if let Some(recommendation) = &consensus.final_recommendation {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    "Recommendation:".cyan().bold(),
                    recommendation
                ));
            }
            if let Some(dissenting) = consensus.dissenting.as_ref().filter(|d| !d.is_empty()) {
                output.push_str(&format!("\n{}\n", "Dissenting:".yellow().bold()));
                for agent in dissenting {
                    output.push_str(&format!("  * {}\n", agent));
                }
            }
        }

        if let Some(log) = &response.conversation_log {
            output.push_str(&format!(
                "\n{}\n",
                format!("({} messages in conversation log)", log.len()).dimmed()
            ));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format any result as pretty JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
