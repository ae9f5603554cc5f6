//! TodoList API server binary.
//!
//! This binary creates the concrete in-memory database and passes it to the
//! API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use todolist::api::{self, ApiError, Config};
use todolist::db::MemoryDatabase;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("API server error: {0}")]
    #[diagnostic(code(todolist::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "todo-api")]
#[command(author, version, about = "TodoList API server", long_about = None)]
struct Cli {
    /// Host address to bind to [env: TODO_API_HOST, default: 127.0.0.1]
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on [env: TODO_API_PORT, default: 8000]
    #[arg(short, long)]
    port: Option<u16>,

    /// Start with no lists instead of the demo data
    #[arg(long)]
    empty: bool,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    todolist::init_tracing();
    let cli = Cli::parse();

    let mut config = Config::new().with_seed_data(!cli.empty);
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    let db = if config.seed_data {
        MemoryDatabase::with_demo_data()
    } else {
        MemoryDatabase::new()
    };
    info!(seed_data = config.seed_data, "in-memory stores ready");

    api::run(config, db).await?;

    Ok(())
}
