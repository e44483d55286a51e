#[cfg(test)]
mod tests {
    use codec_core::compression::{
        codecs::{PlaceholderCompressor, PlaceholderDecompressor},
        Algorithm, CompressionError, Compressor, DecompressHint, Decompressor,
    };
    use codec_core::engine::{Dispatcher, FidelityWarning, TransformRequest};

    #[test]
    fn compress_keeps_forty_percent_prefix() {
        let input: Vec<u8> = (1..=100).collect();
        let out = PlaceholderCompressor::new().compress(&input).unwrap();
        assert_eq!(out, input[..40].to_vec());
    }

    #[test]
    fn compress_keeps_at_least_one_byte() {
        let out = PlaceholderCompressor::new().compress(&[9, 8]).unwrap();
        assert_eq!(out, vec![9]);
    }

    #[test]
    fn decompress_returns_zeros_of_declared_size() {
        let hint = DecompressHint { declared_original_size: Some(16) };
        let out = PlaceholderDecompressor::new().decompress(b"anything", hint).unwrap();
        assert_eq!(out, vec![0u8; 16]);
    }

    #[test]
    fn decompress_without_declared_size_is_internal_error() {
        let err = PlaceholderDecompressor::new()
            .decompress(b"abc", DecompressHint::default())
            .unwrap_err();
        assert!(matches!(err, CompressionError::CodecInternal { .. }));
    }

    #[test]
    fn roundtrip_never_reproduces_original() {
        let dispatcher = Dispatcher::new();
        let input = b"placeholder codecs discard data".to_vec();

        let compressed = dispatcher
            .process(&TransformRequest::compress(Algorithm::Placeholder, &input))
            .unwrap();
        assert_eq!(compressed.warning, Some(FidelityWarning::LossyPlaceholder));

        let restored = dispatcher
            .process(
                &TransformRequest::decompress(Algorithm::Placeholder, &compressed.output)
                    .with_declared_original_size(input.len()),
            )
            .unwrap();
        assert!(restored.is_lossy());
        assert_eq!(restored.processed_size, input.len());
        assert_ne!(restored.output, input);
    }
}
