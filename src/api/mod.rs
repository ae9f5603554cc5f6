//! REST API over the list and item stores.

mod extract;
mod handlers;
pub mod routes;
mod state;

#[cfg(test)]
mod mod_test;

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use miette::Diagnostic;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::db::Database;

pub use handlers::{
    BANNER, CreateItemRequest, CreateListRequest, ErrorResponse, ItemResponse, ListResponse,
    UpdateItemRequest,
};
pub use state::AppState;

/// Default port, the one the tool proxy expects out of the box.
pub const DEFAULT_PORT: u16 = 8000;

/// API server errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(todolist::api::bind),
        help("Is another process already listening on this address? Try --port.")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(todolist::api::serve))]
    Serve(#[source] std::io::Error),
}

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Start with the demo lists and items
    pub seed_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            seed_data: true,
        }
    }
}

impl Config {
    /// Defaults overridden by `TODO_API_HOST` and `TODO_API_PORT` when set.
    ///
    /// Unparseable values are logged and ignored.
    pub fn new() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("TODO_API_HOST") {
            match host.parse() {
                Ok(host) => config.host = host,
                Err(e) => warn!(%host, error = %e, "ignoring invalid TODO_API_HOST"),
            }
        }
        if let Ok(port) = env::var("TODO_API_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(e) => warn!(%port, error = %e, "ignoring invalid TODO_API_PORT"),
            }
        }

        config
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_seed_data(mut self, seed_data: bool) -> Self {
        self.seed_data = seed_data;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Run the API server until Ctrl+C.
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    let app = routes::create_router(AppState::new(db)).layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!("API server listening on http://{}", addr);
    info!("API reference at http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(crate::shutdown_signal())
        .await
        .map_err(ApiError::Serve)?;

    info!("API server stopped");
    Ok(())
}
