//! engine/dispatcher.rs
//! Maps (algorithm, operation) to a codec entry point and runs it.

use crate::compression::{
    create_compressor, create_decompressor, resolve, CompressionError, Operation,
};
use crate::engine::request::TransformRequest;
use crate::engine::result::{ResultAssembler, TransformResult};
use crate::telemetry::{Stage, StageTimer};

/// Stateless dispatcher. Safe to share read-only across threads or build per call.
#[derive(Copy, Clone, Debug, Default)]
pub struct Dispatcher;

impl Dispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Run one transform.
    ///
    /// - Timing covers the codec call only.
    /// - Codec failures are returned unchanged; nothing partial is ever returned.
    pub fn process(&self, request: &TransformRequest<'_>) -> Result<TransformResult, CompressionError> {
        let info = resolve(request.algorithm);
        let stage = Stage::from(request.operation);

        let (output, timing) = match request.operation {
            Operation::Compress => {
                let codec = create_compressor(request.algorithm);
                StageTimer::time(stage, || codec.compress(request.input))
            }
            Operation::Decompress => {
                let codec = create_decompressor(request.algorithm);
                let hint = request.hint();
                StageTimer::time(stage, || codec.decompress(request.input, hint))
            }
        };

        ResultAssembler::assemble(request, &info, output?, timing)
    }

    /// Same as [`Dispatcher::process`], resolving the algorithm from its wire name first.
    pub fn process_named(
        &self,
        algorithm: &str,
        operation: Operation,
        input: &[u8],
        declared_original_size: Option<usize>,
    ) -> Result<TransformResult, CompressionError> {
        let mut request = TransformRequest::from_name(algorithm, operation, input)?;
        request.declared_original_size = declared_original_size;
        self.process(&request)
    }
}
