//! compression/types.rs
//! Algorithm and operation tags, codec traits, and the codec error taxonomy.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::compression::constants::{codec_names, operation_names};

/// Closed set of registered algorithms.
///
/// Adding or removing a codec is an exhaustive-match decision in
/// [`crate::compression::registry`], never an open string lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Rle,
    Deflate,
    Placeholder,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Rle, Algorithm::Deflate, Algorithm::Placeholder];

    /// Wire name used by the boundary layer.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Rle         => codec_names::RLE,
            Algorithm::Deflate     => codec_names::DEFLATE,
            Algorithm::Placeholder => codec_names::PLACEHOLDER,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            codec_names::RLE         => Ok(Algorithm::Rle),
            codec_names::DEFLATE     => Ok(Algorithm::Deflate),
            codec_names::PLACEHOLDER => Ok(Algorithm::Placeholder),
            other => Err(CompressionError::UnknownAlgorithm { name: other.to_string() }),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Compress,
    Decompress,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Compress   => operation_names::COMPRESS,
            Operation::Decompress => operation_names::DECOMPRESS,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            operation_names::COMPRESS   => Ok(Operation::Compress),
            operation_names::DECOMPRESS => Ok(Operation::Decompress),
            other => Err(ParseOperationError { raw: other.to_string() }),
        }
    }
}

/// Operation name outside `compress`/`decompress`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid operation '{raw}': expected 'compress' or 'decompress'")]
pub struct ParseOperationError {
    pub raw: String,
}

/// Codec failure taxonomy. Every failure the engine can raise is one of these four.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompressionError {
    /// Algorithm name is not registered.
    #[error("invalid algorithm selected: '{name}'")]
    UnknownAlgorithm { name: String },

    /// RLE record stream is truncated or otherwise unreadable.
    #[error("RLE decompression failed: invalid compressed data format or incomplete stream ({reason}, {len} bytes)")]
    MalformedStream { len: usize, reason: String },

    /// Input was not produced by the selected algorithm.
    #[error("the file is not compressed with this algorithm ({algorithm}) or is not compressed: {detail}")]
    FormatMismatch { algorithm: Algorithm, detail: String },

    /// Underlying primitive failed or an engine invariant was violated.
    #[error("{codec} codec failed: {msg}")]
    CodecInternal { codec: String, msg: String },
}

impl CompressionError {
    pub fn internal(codec: Algorithm, msg: impl Into<String>) -> Self {
        CompressionError::CodecInternal { codec: codec.name().to_string(), msg: msg.into() }
    }

    /// True when the failure stems from caller input rather than the engine.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CompressionError::UnknownAlgorithm { .. })
    }
}

/// Extra context a decompressor may need beyond the input bytes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DecompressHint {
    /// Caller-declared size of the original input.
    pub declared_original_size: Option<usize>,
}

// Codecs hold no mutable scratch state, so one instance can serve any number of threads.
pub trait Compressor: Send + Sync {
    /// Compress the whole input. Returns nothing on failure.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError>;
}

pub trait Decompressor: Send + Sync {
    /// Decompress the whole input. Returns nothing on failure.
    fn decompress(&self, input: &[u8], hint: DecompressHint) -> Result<Vec<u8>, CompressionError>;
}
