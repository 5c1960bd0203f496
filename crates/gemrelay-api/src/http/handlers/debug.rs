//! Debug endpoints for checking what the relay sees.
//!
//! GET /_models - raw upstream catalog for the configured key.
//! GET /_debug-list - file names in the static directory.

use axum::Json;
use axum::extract::State;

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /_models - Raw upstream model catalog (never cached).
pub async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let catalog = state
        .prompt_service
        .catalog_raw()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Model listing failed"))?;
    Ok(Json(catalog))
}

/// GET /_debug-list - Sorted file names in `public_dir`.
pub async fn list_public_files(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let dir = &state.config.public_dir;
    let read_error = |e: std::io::Error| AppError::Internal(format!("Failed to read {dir}: {e}"));

    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_error)?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_error)? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    Ok(Json(names))
}
