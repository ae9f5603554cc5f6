//! MCP Streamable HTTP service creation
//!
//! The service can be nested into an Axum router.

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use super::client::ApiClient;
use super::server::TodoMcpServer;

/// Create MCP Streamable HTTP service
///
/// Each session gets its own [`TodoMcpServer`] sharing the HTTP client.
///
/// # Example
/// ```no_run
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use todolist::mcp::{ApiClient, create_mcp_service};
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new(None)?;
/// let ct = CancellationToken::new();
/// let app: Router = Router::new().nest_service("/mcp", create_mcp_service(client, ct));
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service(
    client: ApiClient,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<TodoMcpServer, LocalSessionManager> {
    // rmcp expects the factory to fail with io::Error
    let service_factory =
        move || -> Result<TodoMcpServer, std::io::Error> { Ok(TodoMcpServer::new(client.clone())) };

    let mut config = StreamableHttpServerConfig::default();
    config.stateful_mode = true;
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
