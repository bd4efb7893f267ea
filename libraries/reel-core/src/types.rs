//! Core types for media description

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// An addressable media resource the engine can load and decode
///
/// Options are free-form key/value pairs forwarded verbatim to the engine
/// (HTTP headers, cache hints, etc.).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaResource {
    /// Resource locator (typically an HTTP(S) or file URL)
    pub url: String,

    /// Engine-specific loading options
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub options: HashMap<String, String>,
}

impl MediaResource {
    /// Create a resource with no options
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            options: HashMap::new(),
        }
    }

    /// Create a resource with engine options
    pub fn with_options(url: impl Into<String>, options: HashMap<String, String>) -> Self {
        Self {
            url: url.into(),
            options,
        }
    }
}

/// A contiguous buffered range reported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Range start from the beginning of the stream
    pub start: Duration,

    /// Range length
    pub duration: Duration,
}

impl TimeRange {
    /// Create a range from start and length
    pub fn new(start: Duration, duration: Duration) -> Self {
        Self { start, duration }
    }

    /// End of the range from the beginning of the stream
    ///
    /// This is the figure surfaced as "loaded time": how far playback could
    /// proceed from the stream head without re-buffering.
    pub fn end(&self) -> Duration {
        self.start + self.duration
    }
}
