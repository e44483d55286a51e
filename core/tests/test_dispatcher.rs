#[cfg(test)]
mod tests {
    use codec_core::compression::{Algorithm, CompressionError, Operation};
    use codec_core::engine::{CompressionRatio, Dispatcher, TransformRequest};

    #[test]
    fn rle_ratio_on_thousand_zeros() {
        let input = vec![0u8; 1000];
        let result = Dispatcher::new()
            .process(&TransformRequest::compress(Algorithm::Rle, &input))
            .unwrap();

        // four records: 255 + 255 + 255 + 235
        assert_eq!(result.original_size, 1000);
        assert_eq!(result.processed_size, 8);
        assert_eq!(result.compression_ratio, CompressionRatio::Ratio(125.0));
        assert_eq!(result.compression_ratio.to_string(), "125.00");
        assert!(result.warning.is_none());
    }

    #[test]
    fn single_record_ratio() {
        let input = vec![0u8; 255];
        let result = Dispatcher::new()
            .process(&TransformRequest::compress(Algorithm::Rle, &input))
            .unwrap();
        assert_eq!(result.processed_size, 2);
        assert_eq!(result.compression_ratio.to_string(), "127.50");
    }

    #[test]
    fn ratio_is_rounded_to_hundredths() {
        // 3 literals -> 6 bytes, ratio 0.5
        let result = Dispatcher::new()
            .process(&TransformRequest::compress(Algorithm::Rle, b"abc"))
            .unwrap();
        assert_eq!(result.compression_ratio.value(), Some(0.5));

        // [3,a] [2,b] [0,c] [0,d] -> 7 / 8
        let result = Dispatcher::new()
            .process(&TransformRequest::compress(Algorithm::Rle, b"aaabbcd"))
            .unwrap();
        assert_eq!(result.processed_size, 8);
        assert_eq!(result.compression_ratio.to_string(), "0.88");
    }

    #[test]
    fn decompress_has_no_ratio() {
        let result = Dispatcher::new()
            .process(&TransformRequest::decompress(Algorithm::Rle, &[3, b'z']))
            .unwrap();
        assert_eq!(result.output, b"zzz".to_vec());
        assert_eq!(result.original_size, 2);
        assert_eq!(result.processed_size, 3);
        assert_eq!(result.compression_ratio, CompressionRatio::NotApplicable);
        assert_eq!(result.compression_ratio.to_string(), "N/A");
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let err = Dispatcher::new()
            .process_named("bzip2", Operation::Compress, b"data", None)
            .unwrap_err();
        assert_eq!(err, CompressionError::UnknownAlgorithm { name: "bzip2".into() });
        assert!(err.is_client_error());
    }

    #[test]
    fn algorithm_names_are_case_sensitive() {
        assert!("RLE".parse::<Algorithm>().is_err());
        assert!("Lz77".parse::<Algorithm>().is_err());
        assert_eq!("rle".parse::<Algorithm>().unwrap(), Algorithm::Rle);
        assert_eq!("lz77".parse::<Algorithm>().unwrap(), Algorithm::Deflate);
        assert_eq!("huffman".parse::<Algorithm>().unwrap(), Algorithm::Placeholder);
        for alg in Algorithm::ALL {
            assert_eq!(alg.to_string().parse::<Algorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn operation_names() {
        assert_eq!("compress".parse::<Operation>().unwrap(), Operation::Compress);
        assert_eq!("decompress".parse::<Operation>().unwrap(), Operation::Decompress);
        let err = "inflate".parse::<Operation>().unwrap_err();
        assert_eq!(err.raw, "inflate");
    }

    #[test]
    fn codec_errors_pass_through_unchanged() {
        let dispatcher = Dispatcher::new();

        let err = dispatcher
            .process(&TransformRequest::decompress(Algorithm::Rle, &[1, 2, 3]))
            .unwrap_err();
        assert!(matches!(err, CompressionError::MalformedStream { len: 3, .. }));

        let err = dispatcher
            .process(&TransformRequest::decompress(Algorithm::Deflate, b"not zlib"))
            .unwrap_err();
        assert!(matches!(err, CompressionError::FormatMismatch { .. }));
    }

    #[test]
    fn zero_length_compress_output_is_internal_error() {
        let err = Dispatcher::new()
            .process(&TransformRequest::compress(Algorithm::Rle, &[]))
            .unwrap_err();
        assert!(
            matches!(err, CompressionError::CodecInternal { ref codec, .. } if codec == "rle"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn deflate_roundtrip_through_dispatcher() {
        let dispatcher = Dispatcher::new();
        let input = b"dispatch me ".repeat(100);

        let compressed = dispatcher
            .process(&TransformRequest::compress(Algorithm::Deflate, &input))
            .unwrap();
        assert!(compressed.compression_ratio.value().unwrap() > 1.0);

        let restored = dispatcher
            .process(&TransformRequest::decompress(Algorithm::Deflate, &compressed.output))
            .unwrap();
        assert_eq!(restored.output, input);
        assert_eq!(restored.original_size, compressed.processed_size);
    }

    #[test]
    fn results_are_independent_of_prior_calls() {
        let dispatcher = Dispatcher::new();
        let input = b"repeatable".to_vec();
        let first = dispatcher.process(&TransformRequest::compress(Algorithm::Deflate, &input)).unwrap();
        let _ = dispatcher.process(&TransformRequest::compress(Algorithm::Rle, &[9u8; 77])).unwrap();
        let second = dispatcher.process(&TransformRequest::compress(Algorithm::Deflate, &input)).unwrap();
        assert_eq!(first.output, second.output);
    }

    #[test]
    fn elapsed_is_non_negative() {
        let result = Dispatcher::new()
            .process(&TransformRequest::compress(Algorithm::Rle, &[1u8; 4096]))
            .unwrap();
        assert!(result.elapsed_millis() >= 0.0);
    }

    #[test]
    fn concurrent_requests_share_one_dispatcher() {
        let dispatcher = Dispatcher::new();
        let inputs: Vec<Vec<u8>> = (0..16u8)
            .map(|i| (0..1000u32).map(|j| ((j / (i as u32 + 1)) as u8) ^ i).collect())
            .collect();

        crossbeam::thread::scope(|s| {
            for input in &inputs {
                let dispatcher = &dispatcher;
                s.spawn(move |_| {
                    for alg in [Algorithm::Rle, Algorithm::Deflate] {
                        let compressed = dispatcher
                            .process(&TransformRequest::compress(alg, input))
                            .unwrap();
                        let restored = dispatcher
                            .process(&TransformRequest::decompress(alg, &compressed.output))
                            .unwrap();
                        assert_eq!(&restored.output, input);
                    }
                });
            }
        })
        .unwrap();
    }
}
