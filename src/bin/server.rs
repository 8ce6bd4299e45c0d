//! Program HTTP Server Binary
//!
//! Serves the current event-day program as JSON.
//!
//! # Usage
//!
//! ```bash
//! PROGRAM_CONFIG=demos/program.toml PROGRAM_SEED=demos/registrations.json \
//!   cargo run --bin program-server
//! ```
//!
//! # Environment Variables
//!
//! - `PROGRAM_CONFIG`: TOML configuration file (default: built-in configuration)
//! - `PROGRAM_SEED`: JSON registrations loaded at startup (default: empty store)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter directives, e.g. `event_program=debug` (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use event_program::http::{create_router, AppState};
use event_program::repository::{InMemoryRepository, RegistrationRepository};
use event_program::validation::{validate_halls, validate_registrations};
use event_program::{ProgramConfig, ProgramPlanner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting program server");

    let config = match env::var("PROGRAM_CONFIG") {
        Ok(path) => {
            info!(path = %path, "Loading configuration");
            ProgramConfig::load(&path)?
        }
        Err(_) => ProgramConfig::default(),
    };

    let repository = match env::var("PROGRAM_SEED") {
        Ok(path) => {
            let repo = InMemoryRepository::from_json_file(&path)?;
            info!(path = %path, items = repo.len(), "Registrations loaded");
            repo
        }
        Err(_) => InMemoryRepository::new(),
    };

    let planner = ProgramPlanner::new(config)?;

    // Problems here only thin out the program, so report them and keep going.
    let items = repository.registered_items().await?;
    let checks = [
        validate_halls(&planner.config().halls, planner.regulations()),
        validate_registrations(&items, planner.regulations()),
    ];
    for error in checks.into_iter().filter_map(|r| r.err()).flatten() {
        warn!(kind = ?error.kind, "{}", error.message);
    }

    let state = AppState::new(Arc::new(repository), planner);
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
