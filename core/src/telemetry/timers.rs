//! telemetry/timers.rs
//! Stage timer for a single codec invocation.
//!
//! Summary: Measures the codec call alone with a monotonic clock, so request
//! marshalling and result assembly never leak into the reported duration.

use std::fmt;
use std::time::{Duration, Instant};

use crate::compression::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Compress,
    Decompress,
}

impl From<Operation> for Stage {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Compress   => Stage::Compress,
            Operation::Decompress => Stage::Decompress,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Compress   => "compress",
            Stage::Decompress => "decompress",
        };
        f.write_str(name)
    }
}

/// Elapsed time for one stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageTime {
    pub stage: Stage,
    pub elapsed: Duration,
}

#[derive(Clone, Debug)]
pub struct StageTimer {
    stage: Stage,
    start_time: Instant,
}

impl StageTimer {
    pub fn start(stage: Stage) -> Self {
        Self { stage, start_time: Instant::now() }
    }

    pub fn stop(self) -> StageTime {
        StageTime { stage: self.stage, elapsed: self.start_time.elapsed() }
    }

    /// Run `f` and record how long it took.
    pub fn time<T>(stage: Stage, f: impl FnOnce() -> T) -> (T, StageTime) {
        let timer = Self::start(stage);
        let value = f();
        (value, timer.stop())
    }
}
