//! Document generation errors

use thiserror::Error;

/// Errors raised while rendering or storing documents
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The PDF library rejected the document
    #[error("Failed to render document: {0}")]
    RenderFailed(String),

    /// The document could not be written to disk
    #[error("Failed to write document: {0}")]
    Io(#[from] std::io::Error),

    /// A requested path does not stay inside the document store
    #[error("Invalid document path: {0}")]
    InvalidPath(String),
}

impl DocumentError {
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, DocumentError::InvalidPath(_))
    }
}
