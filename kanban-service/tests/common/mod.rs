use kanban_service::config::{KanbanConfig, MongoConfig};
use kanban_service::services::KanbanDb;
use kanban_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Once;
use uuid::Uuid;

/// Nothing listens on port 1, and the short selection timeout keeps the
/// failing query fast.
pub const UNREACHABLE_MONGODB_URI: &str =
    "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200&connectTimeoutMS=200";

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,kanban_service=debug,mongodb=warn")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: KanbanDb,
    pub db_name: String,
}

impl TestApp {
    /// Spawn against `TEST_MONGODB_URI` (default: local server) with a fresh database.
    pub async fn spawn() -> Self {
        let uri = std::env::var("TEST_MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        Self::spawn_with_uri(&uri).await
    }

    pub async fn spawn_with_uri(uri: &str) -> Self {
        init_tracing();

        let db_name = format!("kanban_test_{}", Uuid::new_v4());
        let config = KanbanConfig {
            common: CoreConfig { port: 0 },
            mongodb: MongoConfig {
                uri: uri.to_string(),
                database: db_name.clone(),
            },
            log_level: "debug".to_string(),
            otlp_endpoint: None,
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let ready_url = format!("{}/ready", address);
        for _ in 0..50 {
            if client.get(&ready_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
