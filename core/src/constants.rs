/// Upload ceiling enforced by the boundary layer before bytes reach a codec (50 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Reported when the upload carries no content type.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Environment override for the upload ceiling, in bytes.
pub const ENV_MAX_UPLOAD_BYTES: &str = "CODEC_MAX_UPLOAD_BYTES";

/// HTTP-style status classes the boundary maps failures onto.
pub mod status {
    pub const OK: u16           = 200;
    pub const BAD_REQUEST: u16  = 400;
    pub const SERVER_ERROR: u16 = 500;
}
