//! Library error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced across the library boundary.
///
/// The input and coordinate core is total over its input domain and
/// never produces these; they come from backend orchestration, the
/// presentation hand-off and config loading.
#[derive(Debug, Error)]
pub enum Error {
    /// The pixel buffer handed to present does not match its declared size.
    #[error("bitmap size mismatch: {width}x{height} needs {expected} pixels, got {actual}")]
    BitmapSizeMismatch {
        width: i32,
        height: i32,
        expected: usize,
        actual: usize,
    },

    /// Backend-specific failure while pumping events or presenting.
    #[error("backend error: {0}")]
    Backend(String),

    /// Graphics device rejected the draw call.
    #[error("graphics error: {0}")]
    Graphics(String),

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
