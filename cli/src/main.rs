//! CLI entrypoint for Expert Panel
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use panel_application::{
    ConsultPanelInput, NoProgress, PanelProgressNotifier, PanelService, PanelConsultationError,
};
use panel_domain::{OutputFormat, PanelConfig, Question};
use panel_infrastructure::{
    ConfigLoader, FileConfig, HttpExecutionEngine, OpenAiCompletionClient, StaticExpertRegistry,
};
use panel_presentation::{Cli, Command, ConsoleFormatter, ProgressReporter};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

type Service = PanelService<OpenAiCompletionClient, StaticExpertRegistry, HttpExecutionEngine>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        let details: Vec<String> = issues.iter().map(|i| format!("  - {}", i)).collect();
        bail!("Invalid configuration:\n{}", details.join("\n"));
    }

    let _log_guard = init_logging(cli.verbose, &config)?;
    info!("Starting Expert Panel");

    ConsoleFormatter::set_color(config.output.color);
    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let completion = Arc::new(OpenAiCompletionClient::from_config(&config.completion));
    let registry = Arc::new(StaticExpertRegistry::from_config(&config));
    let engine = Arc::new(HttpExecutionEngine::from_config(&config.engine));
    let service = PanelService::new(completion, registry, engine, config.to_panel_params());

    let progress: Box<dyn PanelProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let output = match command {
        Command::Compose { question } => {
            compose(&service, &question, format, progress.as_ref()).await?
        }
        Command::Consult {
            question,
            experts,
            mode,
            max_rounds,
            allow_debate,
            require_consensus,
            guidance,
            context,
        } => {
            let mut panel = PanelConfig::new(mode, experts)
                .with_max_rounds(max_rounds.unwrap_or(config.panel.default_max_rounds));
            if allow_debate {
                panel = panel.with_allow_debate(true);
            }
            if require_consensus {
                panel = panel.with_require_consensus(true);
            }
            if let Some(guidance) = guidance {
                panel = panel.with_user_guidance(guidance);
            }
            let context: BTreeMap<String, String> = context.into_iter().collect();

            consult(&service, &question, panel, context, format, progress.as_ref()).await?
        }
    };

    println!("{}", output);

    Ok(())
}

async fn compose(
    service: &Service,
    question: &str,
    format: OutputFormat,
    progress: &dyn PanelProgressNotifier,
) -> Result<String> {
    let question = Question::try_from(question.to_string())?;
    let board = service
        .compose_board_with_progress(&question, progress)
        .await;

    Ok(match format {
        OutputFormat::Full => ConsoleFormatter::format_board(question.content(), &board),
        OutputFormat::Json => ConsoleFormatter::format_json(&board),
    })
}

async fn consult(
    service: &Service,
    question: &str,
    panel: PanelConfig,
    context: BTreeMap<String, String>,
    format: OutputFormat,
    progress: &dyn PanelProgressNotifier,
) -> Result<String> {
    let question = Question::try_from(question.to_string())?;

    // Ctrl-C cancels the in-flight engine call
    let token = CancellationToken::new();
    let ctrl_c_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted; cancelling consultation");
            ctrl_c_token.cancel();
        }
    });

    let input = ConsultPanelInput::new(question.clone(), panel)
        .with_context_map(context)
        .with_cancellation(token);

    let response = match service.consult_panel_with_progress(input, progress).await {
        Ok(response) => response,
        Err(PanelConsultationError::Cancelled) => bail!("Consultation cancelled"),
        Err(e) => return Err(e).context("Panel consultation failed"),
    };

    Ok(match format {
        OutputFormat::Full => ConsoleFormatter::format_response(question.content(), &response),
        OutputFormat::Json => ConsoleFormatter::format_json(&response),
    })
}

/// Install the stderr subscriber, plus a file writer when `[logging] file` is set.
fn init_logging(verbose: u8, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match &config.logging.file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
