//! codec-core
//!
//! Codec dispatch and transformation engine with a thin boundary service.
//! No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Codec engine
pub mod compression;
pub mod engine;
pub mod telemetry;

// Boundary layer
pub mod service;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{Algorithm, CompressionError, Operation};
    pub use crate::engine::{CompressionRatio, Dispatcher, FidelityWarning, TransformRequest, TransformResult};
    pub use crate::service::{FileProcessor, ProcessFileRequest, ProcessFileResponse, ServiceConfig, UploadedFile};
    pub use crate::types::ServiceError;
}
