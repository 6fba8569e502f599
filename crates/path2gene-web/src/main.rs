//! path2gene web server
//!
//! Run with: cargo run -p path2gene-web
//! Reads ./path2gene.toml (or $PATH2GENE_CONFIG).

use anyhow::Context;
use path2gene_common::Config;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load().context("failed to load path2gene configuration")?;
    let addr: SocketAddr = config.path2gene.bind.parse()
        .with_context(|| format!("invalid bind address {:?}", config.path2gene.bind))?;

    let state = path2gene_web::state::AppState::new(config)?;
    let app = path2gene_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
