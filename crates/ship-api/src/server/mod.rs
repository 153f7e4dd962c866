//! Server setup and initialization
//!
//! Builds the application, selects the storage backend from configuration,
//! and runs the HTTP server. The backend choice happens exactly once, here;
//! everything downstream sees only the `ShipStore` trait.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use ship_cache::{RedisPool, RedisPoolConfig, RedisShipStore};
use ship_common::{AppConfig, AppError, InteractionVerifier, StoreSettings};
use ship_core::traits::{PlatformClient, ShipStore};
use ship_core::value_objects::UserId;
use ship_db::{create_pool, DatabaseConfig, PgShipStore};
use ship_discord::DiscordRestClient;
use ship_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let store: Arc<dyn ShipStore> = match &config.store {
        StoreSettings::Postgres(db) => {
            info!("Connecting to PostgreSQL...");
            let db_config = DatabaseConfig {
                url: db.url.clone(),
                max_connections: db.max_connections,
                min_connections: db.min_connections,
                ..Default::default()
            };
            let pool = create_pool(&db_config)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            PgShipStore::ensure_schema(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");
            Arc::new(PgShipStore::new(pool))
        }
        StoreSettings::Redis(redis) => {
            info!("Connecting to Redis...");
            let pool = RedisPool::new(RedisPoolConfig {
                url: redis.url.clone(),
                max_connections: redis.max_connections as usize,
            })
            .map_err(|e| AppError::Cache(e.to_string()))?;
            pool.health_check()
                .await
                .map_err(|e| AppError::Cache(e.to_string()))?;
            info!("Redis connection established");
            Arc::new(RedisShipStore::new(pool))
        }
    };

    // Outbound REST client, shared by all handlers
    let rest_client = DiscordRestClient::new(
        config.discord.api_base.clone(),
        config.discord.bot_token.clone(),
    );

    if config.discord.register_commands {
        // Registration failures are not fatal; the previous command set
        // keeps working
        if let Err(e) = rest_client
            .register_commands(&config.discord.application_id)
            .await
        {
            warn!(error = %e, "Slash-command registration failed");
        }
    }

    let platform: Arc<dyn PlatformClient> = Arc::new(rest_client);

    let verifier = InteractionVerifier::new(&config.discord.public_key)
        .map_err(|e| AppError::Config(e.to_string()))?;

    let service_context = ServiceContextBuilder::new()
        .store(store)
        .platform(platform)
        .admin_user_id(UserId::new(config.discord.admin_user_id.clone()))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, verifier, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid bind address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
