//! Error types for playback control

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Seek target was NaN or infinite
    ///
    /// The request is dropped with no state change; its completion callback
    /// is never invoked.
    #[error("Invalid seek target: {0}")]
    InvalidSeekTarget(f64),

    /// The media engine rejected an operation or reported a failure
    #[error("Engine failure: {0}")]
    EngineFailure(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
