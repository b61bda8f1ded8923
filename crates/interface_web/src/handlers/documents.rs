//! Document download handler

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::WebError;
use crate::AppState;

/// Serves a generated PDF as a download
///
/// Paths are store-relative, exactly as persisted on bills and reports.
/// Anything that would escape the documents root resolves to not-found,
/// as does a path with no file behind it.
pub async fn download_document(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, WebError> {
    let absolute = state.documents.resolve(&path)?;
    let bytes = tokio::fs::read(&absolute)
        .await
        .map_err(|_| WebError::NotFound(format!("Document '{path}' not found")))?;

    let filename = absolute
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("document.pdf")
        .to_string();

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
