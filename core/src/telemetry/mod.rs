//! telemetry/mod.rs
//! Timing for codec invocations. No counters and no logging live here.

pub mod timers;

pub use timers::*;
