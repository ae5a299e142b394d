use anyhow::Context;
use clap::{Parser, Subcommand};
use corrcalc_cli::config::{Config, LoggingConfig};
use corrcalc_cli::session::{Axis, Session};
use corrcalc_cli::{render, shell, CorrelationClient};
use corrcalc_core::{CorrelationType, ResultView};
use std::io;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "corrcalc")]
#[command(about = "Correlation Calculator - Pearson and Spearman coefficients via a remote service")]
#[command(version)]
struct Cli {
    /// Base URL of the correlation service (overrides config and CORRCALC_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Config file path (default: ~/.corrcalc/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate correlation for two comma-separated datasets
    Calc {
        /// Dataset X, e.g. --x 1,2,3.5
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        x: Vec<String>,
        /// Dataset Y, same length as X
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        y: Vec<String>,
        /// Correlation type (defaults to the configured one)
        #[arg(long = "type", value_enum)]
        kind: Option<CorrelationType>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Enter datasets interactively
    Interactive {
        /// Initial correlation type
        #[arg(long = "type", value_enum)]
        kind: Option<CorrelationType>,
    },
    /// Show what the configured service offers
    Info,
    /// Explain how to read coefficients
    Guide,
}

impl Commands {
    /// Commands that never talk to the service, and so need no config or client.
    fn is_offline(&self) -> bool {
        matches!(self, Commands::Guide)
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::load_from(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            config.apply_env();
            config
        }
        None => Config::load().context("loading config")?,
    };
    config.apply_api_url(cli.api_url.clone());
    if cli.no_color {
        config.ui.color = false;
    }
    Ok(config)
}

fn init_logging(logging: &LoggingConfig) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(logging.max_level())
        .with_writer(io::stderr);

    if logging.json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

async fn run_calc(
    client: &CorrelationClient,
    config: &Config,
    x: Vec<String>,
    y: Vec<String>,
    kind: Option<CorrelationType>,
    json: bool,
) -> anyhow::Result<()> {
    let mut session = Session::new(kind.unwrap_or(config.ui.correlation_type));

    for (axis, inputs) in [(Axis::X, x), (Axis::Y, y)] {
        if let Err(e) = session.load_batch(axis, inputs.as_slice()) {
            warn!(error = %e, "Rejecting dataset");
            return Err(e.into());
        }
    }

    let outcome = session.calculate(client).await?;
    let view = ResultView::from_outcome(outcome);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render::render_view(&view, config.ui.color));
    }
    Ok(())
}

async fn run_interactive(
    client: &CorrelationClient,
    config: &Config,
    kind: Option<CorrelationType>,
) -> anyhow::Result<()> {
    let mut session = Session::new(kind.unwrap_or(config.ui.correlation_type));
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell::run(
        &mut session,
        client,
        stdin.lock(),
        &mut stdout,
        config.ui.color,
    )
    .await?;
    Ok(())
}

async fn run_info(client: &CorrelationClient) -> anyhow::Result<()> {
    let info = client.service_info().await?;
    print!("{}", render::render_service_info(&info));
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.command.is_offline() {
        print!("{}", render::render_guide());
        return;
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    info!(
        base_url = %config.api.base_url,
        correlation_type = %config.ui.correlation_type,
        "Starting corrcalc with Configuration"
    );

    let client = match CorrelationClient::new(&config.api) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Invalid service configuration");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Calc { x, y, kind, json } => run_calc(&client, &config, x, y, kind, json).await,
        Commands::Interactive { kind } => run_interactive(&client, &config, kind).await,
        Commands::Info => run_info(&client).await,
        Commands::Guide => Ok(()),
    };

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
