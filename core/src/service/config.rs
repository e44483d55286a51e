//! service/config.rs
//! Boundary configuration: upload ceiling and response defaults.

use serde::Deserialize;

use crate::constants::{DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_MIME_TYPE, ENV_MAX_UPLOAD_BYTES};
use crate::types::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Uploads (and declared placeholder sizes) above this are rejected with a client error.
    pub max_upload_bytes: usize,

    /// Reported `mimeType` when the upload has none.
    pub default_mime_type: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            default_mime_type: DEFAULT_MIME_TYPE.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn new(max_upload_bytes: Option<usize>) -> Self {
        Self {
            max_upload_bytes: max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            ..Self::default()
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ServiceError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, overridden by `CODEC_MAX_UPLOAD_BYTES` when set.
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ServiceConfig::from_env`] with a caller-supplied variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServiceError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_MAX_UPLOAD_BYTES) {
            config.max_upload_bytes = raw.trim().parse().map_err(|_| {
                ServiceError::Config(format!("{ENV_MAX_UPLOAD_BYTES}={raw:?} is not a byte count"))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.max_upload_bytes == 0 {
            return Err(ServiceError::Config("max_upload_bytes must be greater than zero".into()));
        }
        Ok(())
    }
}
