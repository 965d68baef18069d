//! Error types for the editor core.
//!
//! - [`EditorError`] - file activation and animation control
//! - [`ConfigError`] - bundled site configuration parsing

use thiserror::Error;

/// Errors returned by [`EditorSession`](super::EditorSession) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// An intro animation is still typing; the request was ignored.
    #[error("editor is busy typing")]
    Busy,
    /// The identifier does not name one of the bundled files.
    #[error("unknown file: {0}")]
    UnknownFile(String),
}

/// Errors raised while loading `site.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The bundled TOML could not be deserialized.
    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),
}
