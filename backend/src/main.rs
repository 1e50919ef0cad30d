//! Backend entry-point: wires REST endpoints and OpenAPI docs.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::web;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use trivia_backend::inbound::http::state::HttpState;
use trivia_backend::outbound::persistence::InMemoryStore;
use trivia_backend::server::{ServerConfig, create_server};

/// Command-line options for the trivia backend.
#[derive(Debug, Parser)]
#[command(name = "trivia-backend", about = "Trivia question bank HTTP API")]
struct Cli {
    /// Socket address to listen on.
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Number of worker threads; defaults to one per logical CPU.
    #[arg(long)]
    workers: Option<usize>,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let store = Arc::new(InMemoryStore::with_trivia_seed());
    let state = web::Data::new(HttpState::from_store(store));

    let mut config = ServerConfig::new(cli.bind);
    if let Some(workers) = cli.workers {
        config = config.with_workers(workers);
    }

    info!(bind = %config.bind_addr(), "starting trivia backend");
    create_server(state, &config)?.await
}
