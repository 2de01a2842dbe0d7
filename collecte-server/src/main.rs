// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Collecte — visitor IP collection service
//
//  HTTP API:  axum on tokio
//  Storage:   append-only text journal, one block per visit
//  Config:    YAML file + COLLECTE_* / PORT env overrides
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use clap::Parser;
use collecte_api::server::ApiState;
use collecte_core::CollecteConfig;
use collecte_journal::VisitJournal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "collecte", version, about = "Collecte — visitor IP collection service")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "collecte.yaml")]
    config: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Override the journal file path from the config
    #[arg(long)]
    journal: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ── Tracing ──
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_target(false)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "Collecte starting");

    // ── Config ──
    // A missing file is not an error: env overrides and defaults still apply.
    if cli.config.exists() {
        info!(path = %cli.config.display(), "Loading config file");
    } else {
        info!("No config file found, using defaults and environment");
    }
    let mut config = CollecteConfig::load(&cli.config)?;

    if let Some(path) = cli.journal {
        config.journal.path = path;
    }

    // ── Visit journal ──
    let journal = VisitJournal::new(config.journal.path.clone());
    info!(path = %journal.path().display(), "Visit journal target");

    // ── HTTP API ──
    let state = Arc::new(ApiState { journal });
    collecte_api::server::start(&config.server, state).await?;

    info!("Collecte stopped");
    Ok(())
}
