//! service/handler.rs
//! File-processing handler: validates the request, runs the dispatcher, builds the response.

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::compression::{resolve, Algorithm, Operation};
use crate::constants::status;
use crate::engine::{Dispatcher, TransformRequest};
use crate::service::config::ServiceConfig;
use crate::service::request::ProcessFileRequest;
use crate::service::response::{ErrorResponse, ProcessFileResponse};
use crate::types::ServiceError;

#[derive(Debug, Clone, Default)]
pub struct FileProcessor {
    config: ServiceConfig,
    dispatcher: Dispatcher,
}

impl FileProcessor {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config, dispatcher: Dispatcher::new() }
    }

    pub fn handle(&self, req: &ProcessFileRequest) -> Result<ProcessFileResponse, ServiceError> {
        let file = req.file.as_ref().ok_or(ServiceError::MissingFile)?;
        if file.bytes.len() > self.config.max_upload_bytes {
            return Err(ServiceError::FileTooLarge {
                size: file.bytes.len(),
                max: self.config.max_upload_bytes,
            });
        }

        let algorithm: Algorithm = req.algorithm.parse()?;
        let operation: Operation = req.operation.parse()?;

        let mut request = TransformRequest::new(algorithm, operation, &file.bytes);
        if operation == Operation::Decompress && resolve(algorithm).needs_declared_size {
            let declared = self.declared_size(req.original_size.as_deref())?;
            request = request.with_declared_original_size(declared);
        }

        debug!(
            %algorithm,
            %operation,
            file_name = %file.file_name,
            input_len = file.bytes.len(),
            "processing upload"
        );

        let result = self.dispatcher.process(&request)?;
        if let Some(warning) = result.warning {
            warn!(%algorithm, %operation, "{}", warning);
        }

        Ok(ProcessFileResponse::from_result(&result, file, &self.config.default_mime_type))
    }

    /// Run [`FileProcessor::handle`] and map the outcome to `(status, json body)`.
    pub fn respond(&self, req: &ProcessFileRequest) -> (u16, Value) {
        let outcome = self
            .handle(req)
            .and_then(|resp| serde_json::to_value(&resp).map_err(ServiceError::from));

        match outcome {
            Ok(body) => (status::OK, body),
            Err(e) => {
                if e.is_client_error() {
                    warn!(error = %e, "rejected request");
                } else {
                    error!(error = %e, "processing failed");
                }
                (e.status_code(), ErrorResponse::from(&e).to_value())
            }
        }
    }

    /// Build a processor from env-style variables and respond; a bad config
    /// becomes a server-side `(status, body)` rather than an error.
    pub fn respond_from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        req: &ProcessFileRequest,
    ) -> (u16, Value) {
        match ServiceConfig::from_lookup(lookup) {
            Ok(config) => Self::new(config).respond(req),
            Err(e) => {
                error!(error = %e, "invalid service configuration");
                (e.status_code(), ErrorResponse::from(&e).to_value())
            }
        }
    }

    /// [`FileProcessor::respond_from_lookup`] over the process environment.
    pub fn respond_from_env(req: &ProcessFileRequest) -> (u16, Value) {
        Self::respond_from_lookup(|key| std::env::var(key).ok(), req)
    }

    fn declared_size(&self, raw: Option<&str>) -> Result<usize, ServiceError> {
        let declared: usize = raw
            .and_then(|s| s.trim().parse().ok())
            .ok_or_else(|| ServiceError::InvalidOriginalSize { raw: raw.map(str::to_string) })?;

        if declared > self.config.max_upload_bytes {
            return Err(ServiceError::DeclaredSizeTooLarge {
                declared,
                max: self.config.max_upload_bytes,
            });
        }
        Ok(declared)
    }
}
