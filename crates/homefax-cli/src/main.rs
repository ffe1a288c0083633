mod config;
mod registry;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use config::{ConfigOverrides, HomefaxConfig, SinkKind};
use homefax_core::StateCode;
use homefax_generate::{GenerationEngine, GenerationError};
use homefax_render::{Layout, RenderError, render_all};
use homefax_sink::{BackendConfig, LocalArchiveSink, RemoteBackendSink, RestBackend, Sink, SinkError};
use registry::{RunContext, init_run_logging, init_stderr_logging, start_run, write_report};

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("core error: {0}")]
    Core(#[from] homefax_core::Error),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file error: {0}")]
    ConfigFile(#[from] toml::de::Error),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "homefax", version, about = "Synthetic homeowners policy datasets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a dataset, render its documents and publish them.
    Generate(GenerateArgs),
    /// Print one generated policy as JSON.
    Show(ShowArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    /// Number of policyholders.
    #[arg(long)]
    holders: Option<u32>,
    #[arg(long)]
    policies_per_state: Option<u32>,
    /// Comma-separated state codes, e.g. `TN,TX,CA`.
    #[arg(long, value_delimiter = ',', value_parser = parse_state)]
    states: Vec<StateCode>,
    /// Output directory for runs.
    #[arg(long)]
    run_dir: Option<PathBuf>,
    #[arg(long, value_enum)]
    sink: Option<SinkKind>,
}

#[derive(Args, Debug)]
struct ShowArgs {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_parser = parse_state)]
    state: StateCode,
    /// One-based policy number within the state.
    #[arg(long, default_value_t = 1)]
    index: u32,
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_state(value: &str) -> Result<StateCode, homefax_core::Error> {
    value.parse()
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args).await,
        Command::Show(args) => run_show(args),
    }
}

async fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let overrides = ConfigOverrides {
        seed: args.seed,
        holders: args.holders,
        policies_per_state: args.policies_per_state,
        states: (!args.states.is_empty()).then_some(args.states),
        sink: args.sink,
        run_dir: args.run_dir,
    };
    let config = HomefaxConfig::load(args.config.as_deref())?.apply(overrides);

    let backend_config = match config.sink {
        SinkKind::Local => None,
        SinkKind::Remote => Some(BackendConfig::from_env()?.with_bucket(config.bucket.clone())),
    };

    let run_id = Uuid::new_v4().to_string();
    let run_ctx = RunContext {
        run_id: run_id.clone(),
        started_at: chrono::Utc::now(),
        config: config.clone(),
        backend: backend_config.as_ref().map(BackendConfig::redacted),
    };
    let run_paths = start_run(&run_ctx)?;
    init_run_logging(&run_paths.logs_path)?;

    info!(
        event = "run_started",
        run_id = %run_id,
        seed = config.seed,
        sink = config.sink.as_str(),
        "run started"
    );
    let timer = Instant::now();

    let generated = GenerationEngine::new(config.generate_options()).run()?;
    write_report(&run_paths.generation_report_path, &generated.report)?;
    info!(
        event = "generation_written",
        path = %run_paths.generation_report_path.display(),
        "generation report written"
    );

    let documents = render_all(&generated.dataset, &Layout::default())?;

    let sink: Box<dyn Sink> = match backend_config {
        None => Box::new(LocalArchiveSink::new(
            run_paths.dataset_dir.clone(),
            run_paths.archive_path.clone(),
        )),
        Some(backend_config) => Box::new(RemoteBackendSink::new(
            RestBackend::new(backend_config)?,
            run_ctx.started_at.date_naive(),
        )),
    };
    let report = sink.publish(&generated.dataset, &documents).await?;
    write_report(&run_paths.sink_report_path, &report)?;

    if !report.is_clean() {
        warn!(
            event = "sink_failures",
            failures = report.failures.len(),
            orphaned_uploads = report.orphaned_uploads.len(),
            "some records were not published"
        );
    }

    info!(
        event = "run_finished",
        status = if report.is_clean() { "success" } else { "partial" },
        duration_ms = timer.elapsed().as_millis() as u64,
        "run finished"
    );
    println!("{}", run_paths.root.display());
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<(), CliError> {
    init_stderr_logging()?;
    let config = HomefaxConfig::load(args.config.as_deref())?.apply(ConfigOverrides {
        seed: args.seed,
        ..ConfigOverrides::default()
    });
    if args.index == 0 || args.index > config.policies_per_state {
        return Err(CliError::InvalidConfig(format!(
            "index must be between 1 and {}",
            config.policies_per_state
        )));
    }

    let engine = GenerationEngine::new(config.generate_options());
    let holders = engine.generate_policyholders();
    let policies = engine.generate_state(args.state, &holders)?;
    let policy = policies
        .into_iter()
        .nth(args.index as usize - 1)
        .ok_or_else(|| {
            CliError::InvalidConfig(format!("no policy {} for {}", args.index, args.state))
        })?;

    println!("{}", serde_json::to_string_pretty(&policy)?);
    Ok(())
}
