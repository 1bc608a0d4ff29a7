mod config;
mod error;
mod parser;
mod server;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use error::AppError;
use server::WikiliteServer;
use wikilite_core::catalog::Catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for MCP JSON-RPC
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting wikilite MCP server");

    let config = Config::from_env()?;
    info!(
        articles_dir = config.articles_dir.as_deref().unwrap_or("<built-in>"),
        seeded = config.random_seed.is_some(),
        tcp = config.tcp_listen_addr.is_some(),
        "configuration loaded"
    );

    let catalog = Arc::new(load_catalog(&config)?);
    info!(articles = catalog.len(), "catalog ready");

    let server = WikiliteServer::new(Arc::clone(&catalog), config.random_seed);

    if let Some(addr) = config.tcp_listen_addr.as_deref() {
        let listener = TcpListener::bind(addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            let server = server.fresh_session();
            tokio::spawn(async move {
                tracing::info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                tracing::info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    } else {
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}

fn load_catalog(config: &Config) -> Result<Catalog, AppError> {
    let catalog = match config.articles_dir() {
        Some(dir) => Catalog::new(parser::parse_articles_dir(&dir)?)?,
        None => Catalog::sample()?,
    };
    if catalog.is_empty() {
        return Err(AppError::Config(
            "catalog is empty: no articles to serve".to_string(),
        ));
    }
    Ok(catalog)
}
