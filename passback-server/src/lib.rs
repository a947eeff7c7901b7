//! passback-server - HTTP surface for the passback grade submission tool
//!
//! The external launch provider validates the inbound LTI launch and attaches
//! a `LaunchToken` to each request before it reaches this router; this crate
//! turns such a request into an AGS score submission and maps the outcome to
//! a JSON response.

mod error;
pub mod http;
pub mod middleware;
mod state;

use std::sync::Arc;

use tokio::net::TcpListener;

pub use error::ServerError;
pub use http::create_router;
pub use state::AppState;

/// The passback HTTP server
pub struct PassbackServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl PassbackServer {
    /// Create a server over the given state
    pub fn new(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the shared application state
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Run the server, binding to the configured address
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.clone(),
                source: e,
            })?;

        tracing::info!("passback server listening on {}", addr);
        self.run_with_listener(listener).await
    }

    /// Run the server on an already bound listener (used by tests)
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<(), ServerError> {
        let router = create_router(self.state);
        axum::serve(listener, router)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with the specified host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Returns the socket address string (e.g., "0.0.0.0:3000")
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
