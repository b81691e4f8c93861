//! Error types for the integration layer.
//!
//! The input core itself has no fatal failure modes (bad input is dropped or
//! mapped to a sentinel); everything that CAN fail lives out here at the
//! edges: configuration files and the dialog channel.

use thiserror::Error;

/// Errors that can occur in the client integration layer.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration file could not be read or written.
    #[error("config I/O failed for {path}: {source}")]
    ConfigIo {
        /// Path that was being accessed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file did not parse as TOML.
    #[error("config parse failed for {path}: {source}")]
    ConfigParse {
        /// Path that was being parsed.
        path: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration could not be serialized back to TOML.
    #[error("config serialize failed: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// The other end of the dialog channel is gone.
    #[error("dialog channel disconnected")]
    DialogDisconnected,

    /// The tick driver was started twice without a stop in between.
    #[error("tick driver already running")]
    AlreadyRunning,
}

/// Result type for integration-layer operations.
pub type ClientResult<T> = Result<T, ClientError>;
