//! jsonmatch-codec - JSON codec and adapter resolution layer
//!
//! This crate provides:
//! - [`JsonType`] describing a value type the codec can target
//! - [`Codec`] and [`Adapter`] traits for resolving and running conversions
//! - [`JsonCodec`] implementation backed by serde_json
//! - [`CodecConfig`] for building a codec from configuration data

mod codec;
mod config;
mod json_type;

pub use codec::{Adapter, Codec, CodecError, JsonAdapter, JsonCodec, JsonCodecBuilder};
pub use config::CodecConfig;
pub use json_type::{AdapterKind, JsonType};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Adapter, AdapterKind, Codec, CodecConfig, CodecError, JsonAdapter, JsonCodec,
        JsonCodecBuilder, JsonType,
    };
}
