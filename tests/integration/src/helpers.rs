//! Test helpers for integration tests
//!
//! Spawns the real application with test doubles behind the ports and signs
//! every request with a locally generated Ed25519 key.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use ed25519_dalek::{Signer, SigningKey};
use reqwest::{Client, Response, StatusCode};
use ship_api::{create_app, AppState};
use ship_common::{
    AppConfig, AppSettings, DatabaseConfig, DiscordConfig, Environment, InteractionVerifier,
    ServerConfig, StoreSettings,
};
use ship_core::value_objects::UserId;
use ship_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{platform_user, MemoryShipStore, RecordingPlatform};

/// Admin user id every test server is configured with
pub const ADMIN_USER_ID: &str = "999";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryShipStore>,
    pub platform: Arc<RecordingPlatform>,
    signing_key: SigningKey,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a test server with the default two-member roster
    pub async fn start() -> Result<Self> {
        Self::start_with_roster(vec![
            platform_user("1", "Ann", false),
            platform_user("2", "Bob", false),
        ])
        .await
    }

    /// Start a test server with a custom member roster
    pub async fn start_with_roster(
        users: Vec<ship_core::traits::PlatformUser>,
    ) -> Result<Self> {
        let signing_key = SigningKey::from_bytes(&[42u8; 32]);
        let public_key_hex = hex::encode(signing_key.verifying_key().to_bytes());

        let store = Arc::new(MemoryShipStore::default());
        let platform = Arc::new(RecordingPlatform::new(users));

        let service_context = ServiceContextBuilder::new()
            .store(store.clone())
            .platform(platform.clone())
            .admin_user_id(UserId::new(ADMIN_USER_ID))
            .build()
            .map_err(|e| anyhow::anyhow!("Context error: {}", e))?;

        let verifier = InteractionVerifier::new(&public_key_hex)
            .map_err(|e| anyhow::anyhow!("Verifier error: {}", e))?;

        let state = AppState::new(service_context, verifier, test_config(&public_key_hex));
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            store,
            platform,
            signing_key,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Sign `timestamp || body` with the server's trusted key
    pub fn sign(&self, timestamp: &str, body: &[u8]) -> String {
        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(body);
        hex::encode(self.signing_key.sign(&message).to_bytes())
    }

    /// POST a correctly signed interaction payload
    pub async fn post_interaction(&self, payload: &serde_json::Value) -> Result<Response> {
        let body = serde_json::to_vec(payload)?;
        let timestamp = "1700000000";
        let signature = self.sign(timestamp, &body);

        Ok(self
            .client
            .post(format!("{}/interactions", self.base_url()))
            .header("x-signature-ed25519", signature)
            .header("x-signature-timestamp", timestamp)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await?)
    }

    /// POST an interaction signed by the wrong key
    pub async fn post_badly_signed(&self, payload: &serde_json::Value) -> Result<Response> {
        let body = serde_json::to_vec(payload)?;
        let rogue = SigningKey::from_bytes(&[13u8; 32]);
        let timestamp = "1700000000";
        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(&body);
        let signature = hex::encode(rogue.sign(&message).to_bytes());

        Ok(self
            .client
            .post(format!("{}/interactions", self.base_url()))
            .header("x-signature-ed25519", signature)
            .header("x-signature-timestamp", timestamp)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await?)
    }

    /// POST an interaction with no signature headers at all
    pub async fn post_unsigned(&self, payload: &serde_json::Value) -> Result<Response> {
        Ok(self
            .client
            .post(format!("{}/interactions", self.base_url()))
            .json(payload)
            .send()
            .await?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self
            .client
            .get(format!("{}{}", self.base_url(), path))
            .send()
            .await?)
    }
}

/// Configuration for test servers; the store settings are never used because
/// the state is built around the in-memory fixtures.
fn test_config(public_key_hex: &str) -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "ship-bot-test".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        discord: DiscordConfig {
            public_key: public_key_hex.to_string(),
            bot_token: "test-token".to_string(),
            application_id: "test-app".to_string(),
            api_base: "http://localhost:9".to_string(),
            admin_user_id: ADMIN_USER_ID.to_string(),
            register_commands: false,
        },
        store: StoreSettings::Postgres(DatabaseConfig {
            url: "postgresql://unused".to_string(),
            max_connections: 1,
            min_connections: 1,
        }),
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json(
    response: Response,
    expected_status: StatusCode,
) -> Result<serde_json::Value> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
