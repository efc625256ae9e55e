use crate::models::Column;
use crate::services::ColumnStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc, options::ClientOptions, Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

pub const COLUMNS_COLLECTION: &str = "columns";

#[derive(Clone)]
pub struct KanbanDb {
    client: MongoClient,
    db: Database,
}

impl KanbanDb {
    /// Build a client for `database`. The driver connects lazily, so an
    /// unreachable server surfaces on the first query, not here.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        let options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!(error = %e, "Invalid MongoDB connection string");
            AppError::from(e)
        })?;
        let hosts = display_hosts(&options);

        tracing::info!(hosts = %hosts, "Connecting to MongoDB");
        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", hosts, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub fn columns(&self) -> Collection<Column> {
        self.db.collection(COLUMNS_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

/// Host list of a parsed connection string. Credentials and query options
/// never appear in it.
pub fn display_hosts(options: &ClientOptions) -> String {
    options
        .hosts
        .iter()
        .map(|host| host.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait]
impl ColumnStore for KanbanDb {
    async fn list_columns(&self) -> Result<Vec<Column>, AppError> {
        let cursor = self.columns().find(None, None).await?;
        let columns: Vec<Column> = cursor.try_collect().await?;
        tracing::debug!(count = columns.len(), "Fetched columns");
        Ok(columns)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn shutdown(&self) {
        tracing::info!("Closing MongoDB client");
        self.client.clone().shutdown().await;
    }
}
