//! ffi.rs
//! Python-facing wrappers over the boundary service.
//!
//! - Client failures raise `ValueError`, server failures raise `RuntimeError`.
//! - The GIL is released while a codec runs.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

use codec_core::service::{FileProcessor, ProcessFileRequest, ServiceConfig, UploadedFile};
use codec_core::types::ServiceError;

fn to_py_err(e: ServiceError) -> PyErr {
    if e.is_client_error() {
        PyValueError::new_err(e.to_string())
    } else {
        PyRuntimeError::new_err(e.to_string())
    }
}

fn build_request(
    data: Vec<u8>,
    algorithm: String,
    operation: String,
    original_size: Option<String>,
    file_name: Option<String>,
    mime_type: Option<String>,
) -> ProcessFileRequest {
    let file = UploadedFile {
        bytes: data,
        file_name: file_name.unwrap_or_default(),
        mime_type,
    };
    ProcessFileRequest {
        file: Some(file),
        algorithm,
        operation,
        original_size,
    }
}

fn processor() -> Result<FileProcessor, ServiceError> {
    Ok(FileProcessor::new(ServiceConfig::from_env()?))
}

/// Process one file and return the JSON response body.
#[pyfunction]
#[pyo3(signature = (data, algorithm, operation, original_size=None, file_name=None, mime_type=None))]
fn process_file(
    py: Python<'_>,
    data: Vec<u8>,
    algorithm: String,
    operation: String,
    original_size: Option<String>,
    file_name: Option<String>,
    mime_type: Option<String>,
) -> PyResult<String> {
    let req = build_request(data, algorithm, operation, original_size, file_name, mime_type);
    py.allow_threads(move || -> Result<String, ServiceError> {
        let resp = processor()?.handle(&req)?;
        Ok(serde_json::to_string(&resp)?)
    })
    .map_err(to_py_err)
}

/// Process one file and return `(status_code, json_body)` without raising.
#[pyfunction]
#[pyo3(signature = (data, algorithm, operation, original_size=None, file_name=None, mime_type=None))]
fn respond(
    py: Python<'_>,
    data: Vec<u8>,
    algorithm: String,
    operation: String,
    original_size: Option<String>,
    file_name: Option<String>,
    mime_type: Option<String>,
) -> (u16, String) {
    let req = build_request(data, algorithm, operation, original_size, file_name, mime_type);
    let (status, body) = py.allow_threads(move || FileProcessor::respond_from_env(&req));
    (status, body.to_string())
}

/// Install a fmt subscriber. Later calls are no-ops.
#[pyfunction]
#[pyo3(signature = (filter=None))]
fn init_logging(filter: Option<&str>) -> bool {
    let filter = filter
        .and_then(|f| EnvFilter::try_new(f).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok()
}

pub fn register(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(process_file, m)?)?;
    m.add_function(wrap_pyfunction!(respond, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    Ok(())
}
