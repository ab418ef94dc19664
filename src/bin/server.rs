//! Trello MCP server binary.
//!
//! Loads credentials from the environment, builds the one process-wide
//! API client, and serves MCP over Streamable HTTP at `/mcp`.

use std::net::IpAddr;
use std::sync::Arc;

use axum::Router;
use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trello_mcp::config::{Config, ConfigError};
use trello_mcp::mcp::create_mcp_service;
use trello_mcp::trello::{ApiError, TrelloClient};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(trello_mcp::binary::config))]
    Config(#[from] ConfigError),

    #[error("Client error: {0}")]
    #[diagnostic(code(trello_mcp::binary::client))]
    Client(#[from] ApiError),

    #[error("Server error: {0}")]
    #[diagnostic(code(trello_mcp::binary::io))]
    Io(#[from] std::io::Error),
}

#[derive(Parser)]
#[command(name = "trello-mcp")]
#[command(author, version, about = "Trello MCP server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trello_mcp=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    init_tracing();
    let cli = Cli::parse();

    let config = Config::from_env()?;
    let client = Arc::new(TrelloClient::new(&config)?);

    let cancellation_token = CancellationToken::new();
    let mcp_service = create_mcp_service(client, cancellation_token.clone());

    let app = Router::new()
        .nest_service("/mcp", mcp_service)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind((cli.host, cli.port)).await?;
    info!("MCP server listening on http://{}:{}/mcp", cli.host, cli.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancellation_token))
        .await?;

    Ok(())
}

/// Resolve on ctrl-c, cancelling open MCP sessions first.
async fn shutdown_signal(cancellation_token: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
        cancellation_token.cancel();
    }
}
