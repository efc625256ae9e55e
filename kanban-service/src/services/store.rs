use crate::models::Column;
use async_trait::async_trait;
use service_core::error::AppError;

/// Read access to the persisted kanban board.
#[async_trait]
pub trait ColumnStore: Send + Sync {
    /// Every column with its embedded tasks, in the store's natural order.
    async fn list_columns(&self) -> Result<Vec<Column>, AppError>;
    async fn health_check(&self) -> Result<(), AppError>;
    async fn shutdown(&self);
}
