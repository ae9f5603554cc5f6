//! Model Context Protocol (MCP) proxy for the TodoList API
//!
//! Exposes the REST operations as MCP tools that forward over HTTP.
//!
//! - **client**: reqwest client and response normalization
//! - **server**: tool definitions and `ServerHandler`
//! - **service**: Streamable HTTP transport
//!
//! The proxy holds no state of its own; every tool call is one API request.

mod client;
mod error;
mod params;
mod server;
mod service;

#[cfg(test)]
mod server_test;

use std::net::SocketAddr;

use axum::Router;
use rmcp::ServiceExt;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use client::{ApiClient, DEFAULT_API_URL, DEFAULT_TIMEOUT, success_envelope};
pub use error::{ProxyError, ProxyResult};
pub use params::{
    CompleteItemParams, CreateItemParams, CreateListParams, DeleteItemParams, GetItemsParams,
    UpdateItemParams,
};
pub use server::{TodoMcpServer, error_envelope};
pub use service::create_mcp_service;

/// Default port for the Streamable HTTP transport.
pub const DEFAULT_MCP_PORT: u16 = 8001;

/// Serve the tools over stdin/stdout until the client disconnects.
pub async fn serve_stdio(client: ApiClient) -> ProxyResult<()> {
    info!(api_url = client.base_url(), "MCP server starting on stdio");

    let running = TodoMcpServer::new(client)
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| ProxyError::Transport {
            message: e.to_string(),
        })?;

    let reason = running.waiting().await.map_err(|e| ProxyError::Transport {
        message: e.to_string(),
    })?;
    info!(?reason, "MCP session ended");
    Ok(())
}

/// Serve the tools over Streamable HTTP at `/mcp` until Ctrl+C.
pub async fn serve_http(addr: SocketAddr, client: ApiClient) -> ProxyResult<()> {
    let api_url = client.base_url().to_string();
    let ct = CancellationToken::new();
    let service = create_mcp_service(client, ct.child_token());

    let app = Router::new()
        .nest_service("/mcp", service)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ProxyError::Bind { addr, source })?;
    info!(%api_url, "MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            crate::shutdown_signal().await;
            ct.cancel();
        })
        .await
        .map_err(|e| ProxyError::Transport {
            message: e.to_string(),
        })?;

    info!("MCP server stopped");
    Ok(())
}
