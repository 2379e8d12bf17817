//! Request Relay
//!
//! A small HTTP service built with Tokio and Axum that forwards a GET
//! request to an upstream API and relays the JSON response.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                REQUEST RELAY                  │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐   ┌──────────┐   ┌──────────┐   │
//!   ─────────────────┼─▶│  http   │──▶│  token   │──▶│  relay   │───┼──▶ Upstream
//!                    │  │ server  │   │  gate    │   │ handler  │   │    API
//!                    │  └─────────┘   └──────────┘   └────┬─────┘   │
//!                    │                                    │          │
//!   Client Response  │  ┌──────────┐                 ┌────▼─────┐   │
//!   ◀────────────────┼──│ response │◀────────────────│ upstream │◀──┼──── JSON
//!                    │  │ envelope │                 │  client  │   │
//!                    │  └──────────┘                 └──────────┘   │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns          │ │
//!                    │  │  ┌────────┐ ┌────────┐ ┌─────────────┐  │ │
//!                    │  │  │ config │ │ health │ │ credentials │  │ │
//!                    │  │  └────────┘ └────────┘ └─────────────┘  │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! Routes:
//! - `GET /` relays to the upstream (token-gated when a token is configured)
//! - `GET /healthz` liveness signal
//! - `POST /login` static credential check

use tokio::net::TcpListener;

use request_relay::config;
use request_relay::http::HttpServer;
use request_relay::lifecycle::Shutdown;
use request_relay::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("request-relay v{} starting", env!("CARGO_PKG_VERSION"));

    // Read configuration once; handlers never touch the environment.
    let config = config::load_from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_configured = config.upstream.api_url.is_some(),
        token_gated = config.upstream.expected_token.is_some(),
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
