//! engine/mod.rs
//! Codec dispatch and result assembly.
//!
//! Control flow: request -> dispatcher selects codec -> codec runs under a stage
//! timer -> assembler derives sizes, ratio, and fidelity warning.

pub mod request;
pub mod result;
pub mod dispatcher;

pub use request::*;
pub use result::*;
pub use dispatcher::*;
