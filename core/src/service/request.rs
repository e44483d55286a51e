//! service/request.rs
//! Request shape delivered by the transport layer after multipart extraction.

/// Single uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedFile {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: Option<String>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { bytes, file_name: file_name.into(), mime_type: None }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Form fields are kept as raw strings; the handler validates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessFileRequest {
    pub file: Option<UploadedFile>,
    pub algorithm: String,
    pub operation: String,
    pub original_size: Option<String>,
}

impl ProcessFileRequest {
    pub fn new(algorithm: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            file: None,
            algorithm: algorithm.into(),
            operation: operation.into(),
            original_size: None,
        }
    }

    pub fn with_file(mut self, file: UploadedFile) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_original_size(mut self, original_size: impl Into<String>) -> Self {
        self.original_size = Some(original_size.into());
        self
    }
}
