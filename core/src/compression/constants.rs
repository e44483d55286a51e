//! compression/constants.rs
//! Wire names and format constants for the registered codecs.

/// Case-sensitive algorithm names accepted at the boundary.
pub mod codec_names {
    pub const RLE: &str         = "rle";
    pub const DEFLATE: &str     = "lz77";
    pub const PLACEHOLDER: &str = "huffman";
}

/// Case-sensitive operation names accepted at the boundary.
pub mod operation_names {
    pub const COMPRESS: &str   = "compress";
    pub const DECOMPRESS: &str = "decompress";
}

/// RLE record width: one count byte followed by one value byte.
pub const RLE_RECORD_LEN: usize = 2;

/// Longest run a single RLE record can carry (count field is one byte).
pub const RLE_MAX_RUN: usize = u8::MAX as usize;

/// Count byte meaning "the next byte is a literal, not a repeat count".
pub const RLE_LITERAL_ESCAPE: u8 = 0;

/// Placeholder "compression" keeps floor(len * 2 / 5) bytes, never fewer than one.
pub const PLACEHOLDER_KEEP_NUMERATOR: usize = 2;
pub const PLACEHOLDER_KEEP_DENOMINATOR: usize = 5;
