use crate::dtos::ColumnResponse;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// `GET /tasks`: every column with its embedded tasks.
pub async fn list_columns(
    State(state): State<AppState>,
) -> Result<Json<Vec<ColumnResponse>>, AppError> {
    let columns = state.store.list_columns().await.map_err(|e| {
        tracing::error!(error = %e, "Error fetching columns");
        e
    })?;

    Ok(Json(
        columns.into_iter().map(ColumnResponse::from).collect(),
    ))
}
