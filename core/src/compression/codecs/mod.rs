//! compression/codecs/mod.rs
//! Concrete codecs. Each is a stateless unit struct implementing
//! [`Compressor`](crate::compression::Compressor) and/or
//! [`Decompressor`](crate::compression::Decompressor).

pub mod deflate;
pub mod placeholder;
pub mod rle;

pub use deflate::*;
pub use placeholder::*;
pub use rle::*;
