//! Application configuration structs
//!
//! Loads configuration from environment variables (with `.env` support).
//! The storage backend is chosen here, at process start; nothing downstream
//! of the `ShipStore` trait ever branches on it.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub discord: DiscordConfig,
    pub store: StoreSettings,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Discord application credentials and identities
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    /// Hex-encoded Ed25519 public key used to verify inbound interactions
    pub public_key: String,
    /// Bot token for outbound REST calls
    pub bot_token: String,
    /// Application id, needed for follow-up edits and command registration
    pub application_id: String,
    /// Base URL of the REST API
    pub api_base: String,
    /// The single user allowed to run ship-management commands
    pub admin_user_id: String,
    /// Re-register the slash commands on startup
    pub register_commands: bool,
}

/// Storage backend selection, decided once at startup
#[derive(Debug, Clone)]
pub enum StoreSettings {
    Postgres(DatabaseConfig),
    Redis(RedisConfig),
}

impl StoreSettings {
    /// Human-readable backend name for startup logs
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Redis(_) => "redis",
        }
    }
}

/// PostgreSQL configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
    pub max_connections: u32,
}

// Default value functions
fn default_app_name() -> String {
    "ship-bot".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_api_base() -> String {
    "https://discord.com/api/v10".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_redis_max_connections() -> u32 {
    10
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let store = match env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "postgres".to_string())
            .to_lowercase()
            .as_str()
        {
            "postgres" => StoreSettings::Postgres(DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            }),
            "redis" => StoreSettings::Redis(RedisConfig {
                url: env::var("REDIS_URL").map_err(|_| ConfigError::MissingVar("REDIS_URL"))?,
                max_connections: env::var("REDIS_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_redis_max_connections),
            }),
            other => {
                return Err(ConfigError::InvalidValue("STORE_BACKEND", other.to_string()));
            }
        };

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("SERVER_PORT"))?,
            },
            discord: DiscordConfig {
                public_key: env::var("DISCORD_PUBLIC_KEY")
                    .map_err(|_| ConfigError::MissingVar("DISCORD_PUBLIC_KEY"))?,
                bot_token: env::var("DISCORD_BOT_TOKEN")
                    .map_err(|_| ConfigError::MissingVar("DISCORD_BOT_TOKEN"))?,
                application_id: env::var("DISCORD_APPLICATION_ID")
                    .map_err(|_| ConfigError::MissingVar("DISCORD_APPLICATION_ID"))?,
                api_base: env::var("DISCORD_API_BASE").unwrap_or_else(|_| default_api_base()),
                admin_user_id: env::var("SHIP_ADMIN_USER_ID")
                    .map_err(|_| ConfigError::MissingVar("SHIP_ADMIN_USER_ID"))?,
                register_commands: env::var("REGISTER_COMMANDS")
                    .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
                    .unwrap_or(false),
            },
            store,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
