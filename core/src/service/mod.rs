//! service/mod.rs
//! Boundary layer between a transport (HTTP, FFI) and the codec engine.
//!
//! Owns upload limits, form-field validation, base64 payload encoding,
//! failure-to-status mapping, and all diagnostic logging.

pub mod config;
pub mod request;
pub mod response;
pub mod handler;

pub use config::*;
pub use request::*;
pub use response::*;
pub use handler::*;
