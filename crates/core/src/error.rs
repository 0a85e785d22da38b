// Central Error Type for the Binding Layer

use thiserror::Error;

/// Failure value surfaced to the embedding runtime.
///
/// The embedding side consumes the `Display` form as opaque failure text;
/// the variants exist so Rust callers can still match on the two I/O
/// failure classes worth telling apart.
#[derive(Error, Debug)]
pub enum HostIoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Spawn failed: {0}")]
    SpawnFailed(String),

    #[error("Command exited with {}: {stderr}", .code.map_or_else(|| "signal".to_string(), |c| format!("code {c}")))]
    CommandFailed { code: Option<i32>, stderr: String },

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias using HostIoError
pub type Result<T> = std::result::Result<T, HostIoError>;

// Native errors collapse to their textual form; only not-found and
// permission-denied keep a distinct variant.
impl From<std::io::Error> for HostIoError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => HostIoError::NotFound(err.to_string()),
            std::io::ErrorKind::PermissionDenied => HostIoError::PermissionDenied(err.to_string()),
            _ => HostIoError::Io(err.to_string()),
        }
    }
}
