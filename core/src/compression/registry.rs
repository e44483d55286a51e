//! compression/registry.rs
//! Codec registry and factory functions.

use crate::compression::codecs::{deflate, placeholder, rle};
use crate::compression::types::{Algorithm, Compressor, Decompressor};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CodecInfo {
    pub name: &'static str,
    /// Decompress(Compress(b)) == b for every b.
    pub lossless: bool,
    /// Decompress needs `DecompressHint::declared_original_size`.
    pub needs_declared_size: bool,
}

pub fn resolve(algorithm: Algorithm) -> CodecInfo {
    match algorithm {
        Algorithm::Rle =>
            CodecInfo { name: algorithm.name(), lossless: true, needs_declared_size: false },
        Algorithm::Deflate =>
            CodecInfo { name: algorithm.name(), lossless: true, needs_declared_size: false },
        Algorithm::Placeholder =>
            CodecInfo { name: algorithm.name(), lossless: false, needs_declared_size: true },
    }
}

pub fn create_compressor(algorithm: Algorithm) -> Box<dyn Compressor> {
    match algorithm {
        Algorithm::Rle         => Box::new(rle::RleCompressor::new()),
        Algorithm::Deflate     => Box::new(deflate::DeflateCompressor::new()),
        Algorithm::Placeholder => Box::new(placeholder::PlaceholderCompressor::new()),
    }
}

pub fn create_decompressor(algorithm: Algorithm) -> Box<dyn Decompressor> {
    match algorithm {
        Algorithm::Rle         => Box::new(rle::RleDecompressor::new()),
        Algorithm::Deflate     => Box::new(deflate::DeflateDecompressor::new()),
        Algorithm::Placeholder => Box::new(placeholder::PlaceholderDecompressor::new()),
    }
}
