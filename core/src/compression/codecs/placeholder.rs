//! codecs/placeholder.rs
//! Stub registered under the `huffman` name.
//!
//! Not a real codec: "compress" keeps a prefix of the input and "decompress"
//! returns zeros of the caller-declared length. Results from this codec are
//! always flagged lossy by the result assembler.

use crate::compression::constants::{PLACEHOLDER_KEEP_DENOMINATOR, PLACEHOLDER_KEEP_NUMERATOR};
use crate::compression::types::{Algorithm, CompressionError, Compressor, DecompressHint, Decompressor};

#[derive(Copy, Clone, Debug, Default)]
pub struct PlaceholderCompressor;

#[derive(Copy, Clone, Debug, Default)]
pub struct PlaceholderDecompressor;

impl PlaceholderCompressor {
    pub fn new() -> Self { Self }
}
impl PlaceholderDecompressor {
    pub fn new() -> Self { Self }
}

/// Number of bytes the stub keeps: `max(1, floor(len * 0.4))`, bounded by `len`.
pub fn placeholder_kept_len(len: usize) -> usize {
    let kept = len / PLACEHOLDER_KEEP_DENOMINATOR * PLACEHOLDER_KEEP_NUMERATOR
        + len % PLACEHOLDER_KEEP_DENOMINATOR * PLACEHOLDER_KEEP_NUMERATOR / PLACEHOLDER_KEEP_DENOMINATOR;
    kept.max(1).min(len)
}

impl Compressor for PlaceholderCompressor {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        Ok(input[..placeholder_kept_len(input.len())].to_vec())
    }
}

impl Decompressor for PlaceholderDecompressor {
    fn decompress(&self, _input: &[u8], hint: DecompressHint) -> Result<Vec<u8>, CompressionError> {
        let size = hint.declared_original_size.ok_or_else(|| {
            CompressionError::internal(
                Algorithm::Placeholder,
                "declared original size is required to decompress",
            )
        })?;
        Ok(vec![0u8; size])
    }
}
