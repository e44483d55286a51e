//! engine/request.rs
//! Per-call transform request.

use crate::compression::{Algorithm, CompressionError, DecompressHint, Operation};

/// One transform call: which codec, which direction, which bytes.
///
/// Borrowed for the duration of a single `Dispatcher::process` call and never retained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransformRequest<'a> {
    pub algorithm: Algorithm,
    pub operation: Operation,
    pub input: &'a [u8],
    /// Only read by placeholder decompress.
    pub declared_original_size: Option<usize>,
}

impl<'a> TransformRequest<'a> {
    pub fn new(algorithm: Algorithm, operation: Operation, input: &'a [u8]) -> Self {
        Self { algorithm, operation, input, declared_original_size: None }
    }

    pub fn compress(algorithm: Algorithm, input: &'a [u8]) -> Self {
        Self::new(algorithm, Operation::Compress, input)
    }

    pub fn decompress(algorithm: Algorithm, input: &'a [u8]) -> Self {
        Self::new(algorithm, Operation::Decompress, input)
    }

    /// Resolve a wire algorithm name. Unknown names fail with `UnknownAlgorithm`.
    pub fn from_name(
        algorithm: &str,
        operation: Operation,
        input: &'a [u8],
    ) -> Result<Self, CompressionError> {
        Ok(Self::new(algorithm.parse()?, operation, input))
    }

    pub fn with_declared_original_size(mut self, size: usize) -> Self {
        self.declared_original_size = Some(size);
        self
    }

    pub fn hint(&self) -> DecompressHint {
        DecompressHint { declared_original_size: self.declared_original_size }
    }
}
