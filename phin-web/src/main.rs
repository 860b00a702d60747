//! phin-web - PhinAccords public site service
//!
//! Bilingual gospel-chord-chart site: locale middleware, slug-based
//! song/artist resolution, and the JSON API, over a SQLite store.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use phin_common::config::ServiceConfig;
use phin_web::{build_router, AppState};

/// PhinAccords public site service
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database file (overrides PHIN_DATABASE and config file)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Bind port (overrides PHIN_PORT and config file)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting PhinAccords site service (phin-web) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();
    let config = ServiceConfig::resolve(args.database, args.port)?;
    info!("Database path: {}", config.database.display());

    let pool = phin_common::db::connect(&config.database).await?;

    let state = AppState::new(pool, config.default_language);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("phin-web listening on http://{}", config.bind_addr());
    info!("Health check: http://{}/api/health", config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
