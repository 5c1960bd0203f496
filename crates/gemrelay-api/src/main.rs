//! gemrelay entry point.
//!
//! Binary name: `gemrelay`
//!
//! Loads `.env` and configuration, sets up tracing, then either serves the
//! relay API or runs a one-shot command.

mod cli;
mod http;
mod state;

use clap::Parser;

use gemrelay_infra::config::{load_api_key, load_dotenv, load_relay_config, mask_key};
use gemrelay_observe::tracing_setup::{init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before parsing, so `.env` can supply PORT and friends.
    let dotenv = load_dotenv();

    let cli = Cli::parse();
    init_tracing(cli.otel, cli.log_filter()).map_err(|e| anyhow::anyhow!(e))?;

    match &dotenv {
        Ok(Some(path)) => tracing::debug!("Loaded environment from {}", path.display()),
        Ok(None) => tracing::debug!("No .env file found"),
        Err(err) => tracing::warn!("Failed to load .env: {err}"),
    }

    let mut config = load_relay_config(cli.config.as_deref()).await;
    let command = cli.into_command();
    if let Commands::Serve(args) = &command {
        if let Some(port) = args.port {
            config.port = port;
        }
        if let Some(host) = &args.host {
            config.host = host.clone();
        }
    }

    let api_key = load_api_key()?;
    tracing::info!(key = %mask_key(&api_key), "GEMINI_API_KEY loaded");

    let state = AppState::init(config, &api_key);

    let result = match command {
        Commands::Serve(_) => serve(state).await,
        Commands::Models => cli::models::print_models(&state).await,
    };

    shutdown_tracing();
    result
}

async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        api_version = %state.config.api_version,
        "Server running on http://{addr}"
    );

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
