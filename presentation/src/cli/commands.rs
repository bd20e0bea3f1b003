//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use panel_domain::{ExpertType, PanelMode, UserGuidance};
use std::path::PathBuf;

/// Output format for boards and panel responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Full,
    /// JSON output
    Json,
}

impl From<OutputFormat> for panel_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => panel_domain::OutputFormat::Full,
            OutputFormat::Json => panel_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for expert-panel
#[derive(Parser, Debug)]
#[command(name = "expert-panel")]
#[command(author, version, about = "Expert Panel - Compose advisory boards and consult expert panels")]
#[command(long_about = r#"
Expert Panel composes advisory boards for a question and runs configured
expert panels through a multi-agent execution engine.

  compose   Analyze the question and select a weighted board from the registry
  consult   Run a fixed set of expert roles and report their answers

Configuration files are loaded from (in priority order):
1. PANEL_* environment variables
2. --config <path>     Explicit config file
3. ./panel.toml        Project-level config
4. ~/.config/expert-panel/config.toml   Global config

Example:
  expert-panel compose "Which FDA pathway fits our AI diagnostic?"
  expert-panel consult --expert ceo --expert cfo --allow-debate "Should we enter the EU first?"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides [output] format in config)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose an advisory board for a question
    Compose {
        /// The question the board should advise on
        question: String,
    },

    /// Consult a configured expert panel
    Consult {
        /// The question to put to the panel
        question: String,

        /// Expert role to seat (repeatable, in speaking order)
        #[arg(short, long = "expert", value_name = "TYPE", required = true)]
        experts: Vec<ExpertType>,

        /// Panel mode: sequential, collaborative or hybrid
        #[arg(long, default_value = "sequential")]
        mode: PanelMode,

        /// Bound on engine rounds (defaults to [panel] default_max_rounds)
        #[arg(long, value_name = "N")]
        max_rounds: Option<u32>,

        /// Let experts delegate to and challenge each other
        #[arg(long)]
        allow_debate: bool,

        /// Ask the engine for a consensus verdict
        #[arg(long)]
        require_consensus: bool,

        /// How much the caller steers the panel: low, medium or high
        #[arg(long, value_name = "LEVEL")]
        guidance: Option<UserGuidance>,

        /// Background facts for the panel (repeatable)
        #[arg(long = "context", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        context: Vec<(String, String)>,
    },
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in '{}'", s));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compose() {
        let cli = Cli::try_parse_from(["expert-panel", "compose", "Which pathway?"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Compose { ref question }) if question == "Which pathway?"
        ));
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_parse_consult() {
        let cli = Cli::try_parse_from([
            "expert-panel",
            "-vv",
            "consult",
            "--expert",
            "ceo",
            "--expert",
            "regulatory-affairs",
            "--mode",
            "collaborative",
            "--context",
            "market=US",
            "--output",
            "json",
            "Which pathway?",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Some(Command::Consult {
                experts,
                mode,
                context,
                allow_debate,
                ..
            }) => {
                assert_eq!(experts, vec![ExpertType::Ceo, ExpertType::RegulatoryAffairs]);
                assert_eq!(mode, PanelMode::Collaborative);
                assert_eq!(context, vec![("market".to_string(), "US".to_string())]);
                assert!(!allow_debate);
            }
            other => panic!("expected consult, got {:?}", other),
        }
    }

    #[test]
    fn test_consult_requires_expert() {
        assert!(Cli::try_parse_from(["expert-panel", "consult", "Q?"]).is_err());
    }

    #[test]
    fn test_unknown_expert_rejected() {
        assert!(
            Cli::try_parse_from(["expert-panel", "consult", "--expert", "wizard", "Q?"]).is_err()
        );
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("stage = pre-submission").unwrap(),
            ("stage".to_string(), "pre-submission".to_string())
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }
}
