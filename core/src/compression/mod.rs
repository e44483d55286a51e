//! compression/mod.rs
//! Whole-buffer compression and decompression.
//!
//! - Every codec is deterministic and stateless; one instance may be shared across threads.
//! - Registry resolves algorithm tags to implementations with an exhaustive match.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;

pub use constants::*;
pub use types::*;
pub use registry::*;
