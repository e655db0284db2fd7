//! `callgrid-server` — serve the booking calendar over HTTP.
//!
//! ## Usage
//!
//! ```sh
//! # Listen on 0.0.0.0:3001 with the demo client roster
//! callgrid-server
//!
//! # Pick an address, start with no clients
//! callgrid-server --host 127.0.0.1 --port 8080 --no-seed
//!
//! # Log filtering
//! RUST_LOG=callgrid_engine=trace callgrid-server
//! ```

use anyhow::{Context, Result};
use callgrid_engine::MemoryStore;
use callgrid_server::{seed, AppState, Config};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "callgrid_server=debug,callgrid_engine=debug,tower_http=info";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_file(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    let state = AppState::new(MemoryStore::new());
    if !config.no_seed {
        let added = seed::seed_clients(state.scheduler.store()).context("Failed to seed clients")?;
        info!(added, "client directory initialized");
    }

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, "callgrid-server listening");

    axum::serve(listener, callgrid_server::app(state)).await?;

    Ok(())
}
