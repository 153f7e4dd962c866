//! Ship bot webhook server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p ship-api
//! ```
//!
//! Configuration is loaded from environment variables (see `AppConfig`).

use ship_common::{try_init_tracing, AppConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        e
    })?;

    // Tracing comes up right after config so every later failure is visible
    let tracing_config = if config.app.env == Environment::Production {
        TracingConfig::production()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = try_init_tracing(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        addr = %config.server.address(),
        backend = config.store.backend_name(),
        "Starting {}",
        config.app.name
    );

    ship_api::run(config).await?;

    Ok(())
}
