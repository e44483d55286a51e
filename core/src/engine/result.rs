//! engine/result.rs
//! Transform result and the assembler that derives its size, ratio, and warning fields.

use std::fmt;
use std::time::Duration;

use crate::compression::{Algorithm, CodecInfo, CompressionError, Operation};
use crate::engine::request::TransformRequest;
use crate::telemetry::StageTime;
use crate::utils::round_to_hundredths;

/// `original / processed`, rounded to two decimals. Only defined for compress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompressionRatio {
    Ratio(f64),
    NotApplicable,
}

impl CompressionRatio {
    pub fn value(&self) -> Option<f64> {
        match self {
            CompressionRatio::Ratio(r) => Some(*r),
            CompressionRatio::NotApplicable => None,
        }
    }
}

impl fmt::Display for CompressionRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionRatio::Ratio(r) => write!(f, "{:.2}", r),
            CompressionRatio::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// Raised on results that are not a genuine round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FidelityWarning {
    LossyPlaceholder,
}

impl FidelityWarning {
    pub fn message(&self) -> &'static str {
        match self {
            FidelityWarning::LossyPlaceholder =>
                "huffman is a placeholder codec: output is lossy and cannot be restored to the original",
        }
    }
}

impl fmt::Display for FidelityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransformResult {
    pub algorithm: Algorithm,
    pub operation: Operation,
    pub original_size: usize,
    pub processed_size: usize,
    pub compression_ratio: CompressionRatio,
    pub elapsed: Duration,
    pub warning: Option<FidelityWarning>,
    pub output: Vec<u8>,
}

impl TransformResult {
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    pub fn is_lossy(&self) -> bool {
        self.warning.is_some()
    }
}

pub struct ResultAssembler;

impl ResultAssembler {
    /// Wrap codec output with derived metadata.
    ///
    /// Fails with `CodecInternal` when a compress produced zero bytes; a ratio
    /// over an empty output is an engine invariant violation, not infinity.
    pub fn assemble(
        request: &TransformRequest<'_>,
        info: &CodecInfo,
        output: Vec<u8>,
        timing: StageTime,
    ) -> Result<TransformResult, CompressionError> {
        let original_size = request.input.len();
        let processed_size = output.len();

        let compression_ratio = match request.operation {
            Operation::Compress => {
                if processed_size == 0 {
                    return Err(CompressionError::CodecInternal {
                        codec: info.name.to_string(),
                        msg: format!(
                            "compress produced zero-length output for {} input bytes",
                            original_size
                        ),
                    });
                }
                CompressionRatio::Ratio(round_to_hundredths(
                    original_size as f64 / processed_size as f64,
                ))
            }
            Operation::Decompress => CompressionRatio::NotApplicable,
        };

        let warning = (!info.lossless).then_some(FidelityWarning::LossyPlaceholder);

        Ok(TransformResult {
            algorithm: request.algorithm,
            operation: request.operation,
            original_size,
            processed_size,
            compression_ratio,
            elapsed: timing.elapsed,
            warning,
            output,
        })
    }
}
