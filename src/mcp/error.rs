use std::net::SocketAddr;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ProxyError {
    #[error("Failed to connect to API server: {source}")]
    #[diagnostic(
        code(todolist::mcp::connection_failed),
        help(
            "Is the API server running? Try: todo-api\nOr set TODO_API_URL environment variable to point to the correct server."
        )
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from API server: {message}")]
    #[diagnostic(
        code(todolist::mcp::invalid_response),
        help(
            "The server returned data in an unexpected format. This might indicate a version mismatch."
        )
    )]
    InvalidResponse { message: String },

    #[error("Error {status}: {message}")]
    #[diagnostic(code(todolist::mcp::api_error))]
    Api { status: u16, message: String },

    #[error("Failed to build HTTP client: {source}")]
    #[diagnostic(code(todolist::mcp::client_build))]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(code(todolist::mcp::bind), help("Try another --port."))]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("MCP transport error: {message}")]
    #[diagnostic(code(todolist::mcp::transport))]
    Transport { message: String },
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ProxyError::ConnectionFailed { source: e }
        } else {
            ProxyError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for ProxyError {
    fn from(e: serde_json::Error) -> Self {
        ProxyError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type ProxyResult<T> = Result<T, ProxyError>;
