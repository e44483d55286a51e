//! service/response.rs
//! Wire responses (camelCase JSON) produced by the boundary layer.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use serde_json::{json, Value};

use crate::engine::TransformResult;
use crate::service::request::UploadedFile;
use crate::types::ServiceError;
use crate::utils::format_hundredths;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessFileResponse {
    pub success: bool,
    pub original_size: usize,
    pub processed_size: usize,
    /// "N.NN" for compress, "N/A" for decompress.
    pub compression_ratio: String,
    /// Codec time in milliseconds, "N.NN".
    pub processing_time: String,
    pub processed_file_base64: String,
    pub mime_type: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ProcessFileResponse {
    pub fn from_result(result: &TransformResult, file: &UploadedFile, default_mime_type: &str) -> Self {
        Self {
            success: true,
            original_size: result.original_size,
            processed_size: result.processed_size,
            compression_ratio: result.compression_ratio.to_string(),
            processing_time: format_hundredths(result.elapsed_millis()),
            processed_file_base64: STANDARD.encode(&result.output),
            mime_type: file
                .mime_type
                .clone()
                .unwrap_or_else(|| default_mime_type.to_string()),
            file_name: file.file_name.clone(),
            warning: result.warning.map(|w| w.to_string()),
        }
    }

    /// Decode the transported payload back to raw bytes.
    pub fn processed_bytes(&self) -> Result<Vec<u8>, ServiceError> {
        Ok(STANDARD.decode(&self.processed_file_base64)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn to_value(&self) -> Value {
        json!({
            "success": self.success,
            "message": self.message,
            "error": self.error,
        })
    }
}

impl From<&ServiceError> for ErrorResponse {
    fn from(e: &ServiceError) -> Self {
        let message = e.to_string();
        Self { success: false, error: message.clone(), message }
    }
}
