//! codecs/rle.rs
//! Byte-exact run-length codec.
//!
//! Format: a flat sequence of 2-byte records `[count, value]`.
//! - `count == 0` is the literal escape: emit `value` once.
//! - `count > 0` emits `value` repeated `count` times.
//!
//! The encoder never produces `count == 1` (isolated bytes use the escape),
//! but the decoder accepts it as "repeat once".

use crate::compression::constants::{RLE_LITERAL_ESCAPE, RLE_MAX_RUN, RLE_RECORD_LEN};
use crate::compression::types::{Algorithm, CompressionError, Compressor, DecompressHint, Decompressor};

#[derive(Copy, Clone, Debug, Default)]
pub struct RleCompressor;

#[derive(Copy, Clone, Debug, Default)]
pub struct RleDecompressor;

impl RleCompressor {
    pub fn new() -> Self { Self }
}
impl RleDecompressor {
    pub fn new() -> Self { Self }
}

/// Encode `input` into RLE records. Runs longer than 255 split into consecutive records.
pub fn rle_encode(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len().min(1024) * RLE_RECORD_LEN);
    let mut i = 0;

    while i < input.len() {
        let value = input[i];
        let run = input[i..]
            .iter()
            .take(RLE_MAX_RUN)
            .take_while(|&&b| b == value)
            .count();

        let count = if run > 1 { run as u8 } else { RLE_LITERAL_ESCAPE };
        out.push(count);
        out.push(value);
        i += run;
    }

    out
}

/// Decode an RLE record stream. The whole stream is validated before any output is built.
///
/// Output can reach 127.5x the input (every record `[255, v]`), so the buffer grows
/// with the records instead of being sized up front; exhausting memory is `CodecInternal`.
pub fn rle_decode(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    if input.len() % RLE_RECORD_LEN != 0 {
        return Err(CompressionError::MalformedStream {
            len: input.len(),
            reason: format!("dangling count byte at offset {}", input.len() - 1),
        });
    }

    let mut out = Vec::with_capacity(input.len());
    for rec in input.chunks_exact(RLE_RECORD_LEN) {
        let (count, value) = (rec[0], rec[1]);
        let repeat = match count {
            RLE_LITERAL_ESCAPE => 1,
            n => n as usize,
        };
        out.try_reserve(repeat).map_err(|e| {
            CompressionError::internal(
                Algorithm::Rle,
                format!("cannot grow output past {} bytes: {}", out.len(), e),
            )
        })?;
        out.resize(out.len() + repeat, value);
    }

    Ok(out)
}

impl Compressor for RleCompressor {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        Ok(rle_encode(input))
    }
}

impl Decompressor for RleDecompressor {
    fn decompress(&self, input: &[u8], _hint: DecompressHint) -> Result<Vec<u8>, CompressionError> {
        rle_decode(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_bytes_use_literal_escape() {
        assert_eq!(rle_encode(b"ab"), vec![0, b'a', 0, b'b']);
    }

    #[test]
    fn run_then_literal() {
        assert_eq!(rle_encode(&[7, 7, 7, 9]), vec![3, 7, 0, 9]);
    }

    #[test]
    fn run_of_256_splits_into_full_record_and_literal() {
        let input = vec![0xAAu8; 256];
        assert_eq!(rle_encode(&input), vec![255, 0xAA, 0, 0xAA]);
    }

    #[test]
    fn count_one_decodes_as_single_repeat() {
        assert_eq!(rle_decode(&[1, b'x', 0, b'y']).unwrap(), b"xy".to_vec());
    }
}
