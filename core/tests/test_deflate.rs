#[cfg(test)]
mod tests {
    use codec_core::compression::{
        codecs::{rle_encode, DeflateCompressor, DeflateDecompressor},
        Algorithm, CompressionError, Compressor, DecompressHint, Decompressor,
    };

    fn compress(input: &[u8]) -> Vec<u8> {
        DeflateCompressor::new().compress(input).expect("deflate compress")
    }

    fn decompress(input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        DeflateDecompressor::new().decompress(input, DecompressHint::default())
    }

    #[test]
    fn roundtrip_text() {
        let input = b"the quick brown fox jumps over the lazy dog ".repeat(50);
        let compressed = compress(&input);
        assert!(compressed.len() < input.len());
        assert_eq!(decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn roundtrip_highly_compressible() {
        // far more than 2x: output buffer must grow across calls
        for input in [vec![0u8; 1000], b"hello ".repeat(50), vec![0x5Au8; 1 << 20]] {
            let compressed = compress(&input);
            assert!(compressed.len() * 2 < input.len());
            assert_eq!(decompress(&compressed).unwrap(), input);
        }
    }

    #[test]
    fn roundtrip_empty() {
        let compressed = compress(&[]);
        assert!(!compressed.is_empty(), "zlib container is never empty");
        assert!(decompress(&compressed).unwrap().is_empty());
    }

    #[test]
    fn roundtrip_large_incompressible() {
        // xorshift noise, grows the output buffer several times during inflate
        let mut state = 0x2545_F491u32;
        let input: Vec<u8> = (0..200_000)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state as u8
            })
            .collect();
        assert_eq!(decompress(&compress(&input)).unwrap(), input);
    }

    #[test]
    fn output_is_a_zlib_stream() {
        let compressed = compress(b"abc");
        assert_eq!(compressed[0] & 0x0F, 8, "CM must be deflate");
        assert_eq!(((compressed[0] as u16) << 8 | compressed[1] as u16) % 31, 0);
    }

    #[test]
    fn rle_output_is_format_mismatch() {
        let rle = rle_encode(&vec![0u8; 1000]);
        let err = decompress(&rle).unwrap_err();
        assert!(
            matches!(err, CompressionError::FormatMismatch { algorithm: Algorithm::Deflate, .. }),
            "unexpected error: {err:?}"
        );
        assert!(err.to_string().contains("not compressed with this algorithm"));
    }

    #[test]
    fn plain_text_is_format_mismatch() {
        let err = decompress(b"definitely not deflate").unwrap_err();
        assert!(matches!(err, CompressionError::FormatMismatch { .. }));
    }

    #[test]
    fn empty_input_is_unexpected_eof() {
        let err = decompress(&[]).unwrap_err();
        assert!(
            matches!(err, CompressionError::CodecInternal { ref msg, .. } if msg.contains("unexpected end of file")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn truncated_stream_is_unexpected_eof() {
        let compressed = compress(&b"abcdefgh".repeat(100));
        for cut in [2, compressed.len() / 2, compressed.len() - 1] {
            let err = decompress(&compressed[..cut]).unwrap_err();
            assert!(
                matches!(err, CompressionError::CodecInternal { ref codec, .. } if codec == "lz77"),
                "cut at {cut}: unexpected error: {err:?}"
            );
        }
    }

    #[test]
    fn level_outside_range_falls_back_to_default() {
        let input = b"level test ".repeat(20);
        let a = DeflateCompressor::with_level(42).compress(&input).unwrap();
        let b = DeflateCompressor::new().compress(&input).unwrap();
        assert_eq!(a, b);
    }
}
