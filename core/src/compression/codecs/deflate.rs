//! Deflate (zlib wrapper) via flate2.
//!
//! The container is whatever zlib defines: 2-byte header, deflate body, Adler-32 trailer.

use std::io::Write;
use flate2::{Compression, Decompress, FlushDecompress, Status, write::ZlibEncoder};

use crate::compression::types::{Algorithm, CompressionError, Compressor, DecompressHint, Decompressor};

#[derive(Copy, Clone, Debug)]
pub struct DeflateCompressor {
    level: Compression,
}

impl DeflateCompressor {
    pub fn new() -> Self {
        Self { level: Compression::default() }
    }

    pub fn with_level(level: u32) -> Self {
        let lvl = match level {
            0..=9 => Compression::new(level),
            _ => Compression::default(),
        };
        Self { level: lvl }
    }
}

impl Default for DeflateCompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor for DeflateCompressor {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut enc = ZlibEncoder::new(Vec::with_capacity(input.len() / 2 + 16), self.level);
        enc.write_all(input)
            .map_err(|e| CompressionError::internal(Algorithm::Deflate, e.to_string()))?;
        enc.finish()
            .map_err(|e| CompressionError::internal(Algorithm::Deflate, e.to_string()))
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct DeflateDecompressor;

impl DeflateDecompressor {
    pub fn new() -> Self { Self }
}

fn mismatch(detail: impl Into<String>) -> CompressionError {
    CompressionError::FormatMismatch { algorithm: Algorithm::Deflate, detail: detail.into() }
}

impl Decompressor for DeflateDecompressor {
    /// Header and data errors are `FormatMismatch`; input that runs out before the
    /// final block (including empty input) is `CodecInternal`.
    fn decompress(&self, input: &[u8], _hint: DecompressHint) -> Result<Vec<u8>, CompressionError> {
        let mut inflater = Decompress::new(true);
        let mut out = Vec::with_capacity(input.len().saturating_mul(2).max(64));

        loop {
            if out.len() == out.capacity() {
                out.reserve(out.capacity());
            }

            let in_before = inflater.total_in();
            let out_before = inflater.total_out();
            // total_in never exceeds the slice it was fed
            let consumed = in_before as usize;

            let status = inflater
                .decompress_vec(&input[consumed..], &mut out, FlushDecompress::None)
                .map_err(|e| mismatch(e.to_string()))?;

            match status {
                Status::StreamEnd => return Ok(out),
                Status::Ok | Status::BufError => {
                    let stalled = inflater.total_in() == in_before && inflater.total_out() == out_before;
                    if stalled && out.len() < out.capacity() {
                        return Err(CompressionError::internal(
                            Algorithm::Deflate,
                            format!(
                                "unexpected end of file after {} of {} input bytes",
                                inflater.total_in(),
                                input.len()
                            ),
                        ));
                    }
                }
            }
        }
    }
}
