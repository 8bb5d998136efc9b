//! Codec configuration types

use serde::{Deserialize, Serialize};

/// Configuration for building a [`JsonCodec`](crate::JsonCodec)
///
/// Unknown-field checking is not configurable here: matchers always resolve
/// strict adapters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Pretty-print serialized output (default: false)
    #[serde(default)]
    pub pretty: bool,

    /// Enable reflective adapters for every type (default: false)
    #[serde(default)]
    pub reflective: bool,
}

impl CodecConfig {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    ///
    /// Empty input yields the default configuration.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }
}
