use thiserror::Error;

use crate::compression::{CompressionError, ParseOperationError};
use crate::constants::status;

/// Boundary-level error covering request validation, codec failures, and payload encoding.
/// - `From<T>` impls enable `?` from the codec engine and serde.
/// - Display text is surfaced to callers verbatim.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("No file uploaded.")]
    MissingFile,

    #[error("File is too large: {size} bytes exceeds the {max} byte limit.")]
    FileTooLarge { size: usize, max: usize },

    #[error(transparent)]
    InvalidOperation(#[from] ParseOperationError),

    /// `originalSize` missing or not a non-negative integer where it is required.
    #[error("invalid originalSize {raw:?}: a non-negative integer is required to decompress huffman data")]
    InvalidOriginalSize { raw: Option<String> },

    #[error("declared originalSize {declared} exceeds the {max} byte limit")]
    DeclaredSizeTooLarge { declared: usize, max: usize },

    #[error(transparent)]
    Transform(#[from] CompressionError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid base64 payload: {0}")]
    InvalidPayload(#[from] base64::DecodeError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ServiceError {
    /// Validation failures are the caller's fault; everything else is ours.
    pub fn is_client_error(&self) -> bool {
        match self {
            ServiceError::MissingFile
            | ServiceError::FileTooLarge { .. }
            | ServiceError::InvalidOperation(_)
            | ServiceError::InvalidOriginalSize { .. }
            | ServiceError::DeclaredSizeTooLarge { .. } => true,
            ServiceError::Transform(e) => e.is_client_error(),
            // our own payload failed to decode
            ServiceError::InvalidPayload(_)
            | ServiceError::Serialization(_)
            | ServiceError::Config(_) => false,
        }
    }

    pub fn status_code(&self) -> u16 {
        if self.is_client_error() { status::BAD_REQUEST } else { status::SERVER_ERROR }
    }
}
