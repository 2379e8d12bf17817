//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with relay, health, and login handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Apply the token gate in front of the relay route
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::PropagateRequestIdLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::auth::credentials::CredentialStore;
use crate::auth::login::login;
use crate::auth::token::require_api_token;
use crate::config::RelayConfig;
use crate::health::healthz;
use crate::http::request::RequestIdLayer;
use crate::relay::handler::relay_handler;
use crate::relay::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub upstream: UpstreamClient,
    pub credentials: Arc<CredentialStore>,
}

/// HTTP server for the request relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let credentials = Arc::new(CredentialStore::from_config(&config.credentials));

        let state = AppState {
            config: Arc::new(config),
            upstream: UpstreamClient::new(),
            credentials,
        };

        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let request_timeout = Duration::from_secs(state.config.timeouts.request_secs);

        // The token gate wraps only the relay route; health and login stay open.
        let relay_route = Router::new()
            .route("/", get(relay_handler))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                require_api_token,
            ));

        Router::new()
            .route("/healthz", get(healthz))
            .route("/login", post(login))
            .merge(relay_route)
            .with_state(state)
            .layer(TimeoutLayer::new(request_timeout))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(RequestIdLayer)
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Shuts down gracefully on Ctrl+C or when the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Shutdown signal received");
                    }
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown triggered");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
