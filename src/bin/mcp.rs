//! TodoList MCP proxy binary.
//!
//! Serves the to-do tools over stdio (for MCP clients that spawn the
//! process) or Streamable HTTP, forwarding every call to the REST API.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use miette::Diagnostic;
use thiserror::Error;
use todolist::mcp::{self, ApiClient, DEFAULT_MCP_PORT, ProxyError};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("MCP server error: {0}")]
    #[diagnostic(code(todolist::binary::mcp))]
    Mcp(#[from] ProxyError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Transport {
    Stdio,
    Http,
}

#[derive(Parser)]
#[command(name = "todo-mcp")]
#[command(author, version, about = "MCP tools for the TodoList API", long_about = None)]
struct Cli {
    /// Base URL of the TodoList API [env: TODO_API_URL, default: http://localhost:8000]
    #[arg(long)]
    api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout: u64,

    /// How MCP clients reach this server
    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    transport: Transport,

    /// Host address to bind to (http transport only)
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    host: IpAddr,

    /// Port to listen on (http transport only)
    #[arg(short, long, default_value_t = DEFAULT_MCP_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    todolist::init_tracing();
    let cli = Cli::parse();

    let client = ApiClient::with_timeout(cli.api_url, Duration::from_secs(cli.timeout))?;

    match cli.transport {
        Transport::Stdio => mcp::serve_stdio(client).await?,
        Transport::Http => mcp::serve_http(SocketAddr::new(cli.host, cli.port), client).await?,
    }

    Ok(())
}
