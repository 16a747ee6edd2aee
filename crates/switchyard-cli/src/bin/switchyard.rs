//! CLI for the Switchyard activity dispatch engine

use clap::Parser;
use std::path::PathBuf;
use switchyard::SwitchyardConfig;
use switchyard_cli::{commands, input};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "switchyard")]
#[command(author, version, about = "Activity category dispatch engine", long_about = None)]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "SWITCHYARD_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Config file path
    #[arg(short, long, env = "SWITCHYARD_CONFIG", global = true)]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the category route each activity resolves to
    Route {
        /// Activity JSON file, or - for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Dispatch activities through the configured handlers
    Run {
        /// Activity JSON file, or - for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Disable the per-category trace handler
        #[arg(long)]
        no_trace: bool,
    },
    /// List every dispatch category
    Categories,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config_file {
        Some(path) => SwitchyardConfig::load_from_file(path)?,
        None => SwitchyardConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // Initialize logging
    let filter = format!(
        "switchyard={level},switchyard_core={level},switchyard_cli={level}",
        level = config.log_level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(path) = &cli.config_file {
        info!("Configuration loaded from: {}", path.display());
    }

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Route { input } => {
            let activities = input::parse_activities(&input::read_source(&input)?)?;
            commands::run_route(&activities, &mut stdout)?;
        }
        Commands::Run { input, no_trace } => {
            if no_trace {
                config.trace_categories = false;
            }
            let activities = input::parse_activities(&input::read_source(&input)?)?;
            if let Err(e) = commands::run_run(activities, &config, &mut stdout).await {
                warn!("Dispatch aborted: {}", e);
                return Err(e.into());
            }
        }
        Commands::Categories => commands::run_categories(&mut stdout)?,
    }

    Ok(())
}
