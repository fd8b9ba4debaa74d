use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orbitify_core::TimeRange;
use orbitify_infrastructure::ConfigService;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "orbitify")]
#[command(about = "Orbitify CLI - your top Spotify tracks as a solar system", long_about = None)]
struct Cli {
    /// Path to config.toml (default: ~/.config/orbitify/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the URL that starts the Spotify login
    Login,
    /// Load the solar system from an OAuth callback URL
    Show {
        /// Page URL the backend redirected to (carries access_token or error)
        #[arg(long)]
        callback: String,
        /// short_term, medium_term or long_term
        #[arg(long)]
        time_range: Option<TimeRange>,
        /// Skip album artwork probes
        #[arg(long)]
        no_probe: bool,
        /// Seed for orbit phase delays
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the resolved configuration
    Config,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            // target prefix covers orbitify_core, orbitify_infrastructure and orbitify_cli
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "orbitify=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new().context("Failed to resolve config path")?,
    };
    let config = service
        .load()
        .with_context(|| format!("Failed to load config from {}", service.path().display()))?;

    match cli.command {
        Commands::Login => commands::login::run(&config),
        Commands::Show {
            callback,
            time_range,
            no_probe,
            seed,
        } => {
            let args = commands::show::ShowArgs {
                callback,
                time_range,
                probe_images: !no_probe,
                seed,
            };
            commands::show::run(config, args).await?
        }
        Commands::Config => commands::config::run(&service, &config)?,
    }

    Ok(())
}
