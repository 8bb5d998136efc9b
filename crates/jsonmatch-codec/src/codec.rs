//! Codec traits and JSON implementation

use crate::config::CodecConfig;
use crate::json_type::{AdapterKind, JsonType};
use serde_ignored::Path;
use std::any::TypeId;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;
use thiserror::Error;

/// Errors that can occur while resolving an adapter or converting a value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// No conversion routine could be obtained for the target type
    #[error("no adapter for {type_name}: {reason}")]
    Resolution { type_name: String, reason: String },

    /// The text is not well-formed JSON
    #[error("malformed JSON: {0}")]
    Syntax(String),

    /// Well-formed JSON whose shape does not fit the target type
    #[error("unexpected JSON data: {0}")]
    Data(String),

    /// An object field the target type does not declare (strict adapters only)
    #[error("unknown field at {path}")]
    UnknownField { path: String },

    /// The value could not be written as JSON
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl CodecError {
    /// Check if this error happened while resolving an adapter
    pub fn is_resolution(&self) -> bool {
        matches!(self, CodecError::Resolution { .. })
    }

    fn resolution(type_name: &str, reason: &str) -> Self {
        CodecError::Resolution {
            type_name: type_name.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() {
            CodecError::Syntax(err.to_string())
        } else if err.is_data() {
            CodecError::Data(err.to_string())
        } else {
            CodecError::Serialization(err.to_string())
        }
    }
}

/// A resolved conversion routine for values of type `T`
pub trait Adapter<T> {
    /// Convert JSON text to a value
    ///
    /// Returns `Ok(None)` when the text is the JSON `null` literal.
    fn from_json(&self, text: &str) -> Result<Option<T>, CodecError>;

    /// Convert a value to JSON text
    fn to_json(&self, value: &T) -> Result<String, CodecError>;

    /// Reject JSON objects containing fields the target type does not declare
    fn fail_on_unknown(self) -> Self
    where
        Self: Sized;
}

/// A JSON conversion service that resolves adapters per target type
pub trait Codec: Send + Sync {
    /// Adapter produced for a target type
    type Adapter<T: JsonType>: Adapter<T>;

    /// Resolve the adapter for `T`, failing with [`CodecError::Resolution`]
    /// when this codec cannot convert `T`
    fn adapter<T: JsonType>(&self) -> Result<Self::Adapter<T>, CodecError>;

    /// Get the content type for this codec
    fn content_type(&self) -> &'static str;
}

/// JSON codec implementation using serde_json
///
/// Built-in and generated adapters always resolve. Reflective adapters
/// resolve only when reflection is enabled or the type was registered.
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    /// Whether to pretty-print output (default: false)
    pretty: bool,
    reflective: bool,
    registered: HashMap<Cow<'static, str>, TypeId>,
    ambiguous: HashSet<Cow<'static, str>>,
}

impl JsonCodec {
    /// Create a default-configured JSON codec
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON codec that pretty-prints output
    pub fn pretty() -> Self {
        Self::builder().pretty(true).build()
    }

    /// Create a JSON codec with reflective adapters enabled
    pub fn reflective() -> Self {
        Self::builder().reflective(true).build()
    }

    /// Start building a customized codec
    pub fn builder() -> JsonCodecBuilder {
        JsonCodecBuilder::default()
    }

    /// Create a codec from configuration
    pub fn from_config(config: &CodecConfig) -> Self {
        Self::builder()
            .pretty(config.pretty)
            .reflective(config.reflective)
            .build()
    }

    /// Check if reflective adapters are enabled
    pub fn is_reflective(&self) -> bool {
        self.reflective
    }

    fn resolve<T: JsonType>(&self) -> Result<(), CodecError> {
        let type_name = T::type_name();
        let kind = T::adapter_kind();
        tracing::trace!(type_name = %type_name, kind = ?kind, "resolving JSON adapter");

        if self.ambiguous.contains(&type_name) {
            return Err(CodecError::resolution(
                &type_name,
                "multiple types are registered under this name",
            ));
        }

        match kind {
            AdapterKind::Builtin | AdapterKind::Generated => Ok(()),
            AdapterKind::Reflective if self.reflective => Ok(()),
            AdapterKind::Reflective
                if self.registered.get(&type_name) == Some(&TypeId::of::<T>()) =>
            {
                Ok(())
            }
            AdapterKind::Reflective => Err(CodecError::resolution(
                &type_name,
                "reflective adapters are not enabled on this codec; enable reflection or register the type",
            )),
        }
    }
}

impl Codec for JsonCodec {
    type Adapter<T: JsonType> = JsonAdapter<T>;

    fn adapter<T: JsonType>(&self) -> Result<JsonAdapter<T>, CodecError> {
        self.resolve::<T>()?;
        Ok(JsonAdapter::new(self.pretty))
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

/// Builder for [`JsonCodec`]
#[derive(Debug, Clone, Default)]
pub struct JsonCodecBuilder {
    pretty: bool,
    reflective: bool,
    registered: HashMap<Cow<'static, str>, TypeId>,
    ambiguous: HashSet<Cow<'static, str>>,
}

impl JsonCodecBuilder {
    /// Set whether output is pretty-printed
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set whether reflective adapters are available for every type
    pub fn reflective(mut self, reflective: bool) -> Self {
        self.reflective = reflective;
        self
    }

    /// Register an adapter for `T` under its type name
    ///
    /// Registering two different types under the same name makes that name
    /// ambiguous, and resolution of it fails.
    pub fn register<T: JsonType>(mut self) -> Self {
        let type_name = T::type_name();
        let type_id = TypeId::of::<T>();
        match self.registered.get(&type_name).copied() {
            Some(existing) if existing != type_id => {
                tracing::debug!(type_name = %type_name, "ambiguous adapter registration");
                self.ambiguous.insert(type_name);
            }
            Some(_) => {}
            None => {
                self.registered.insert(type_name, type_id);
            }
        }
        self
    }

    /// Build the codec
    pub fn build(self) -> JsonCodec {
        JsonCodec {
            pretty: self.pretty,
            reflective: self.reflective,
            registered: self.registered,
            ambiguous: self.ambiguous,
        }
    }
}

/// serde_json adapter for a single target type
#[derive(Debug, Clone)]
pub struct JsonAdapter<T> {
    pretty: bool,
    fail_on_unknown: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T: JsonType> JsonAdapter<T> {
    fn new(pretty: bool) -> Self {
        Self {
            pretty,
            fail_on_unknown: false,
            _marker: PhantomData,
        }
    }

    /// Check if unknown fields are rejected
    pub fn is_strict(&self) -> bool {
        self.fail_on_unknown
    }
}

impl<T: JsonType> Adapter<T> for JsonAdapter<T> {
    /// Fields are read straight from the text, so serde's own checks (such as
    /// duplicate fields) apply. Keys serde skipped are collected while reading
    /// and reported as unknown by strict adapters.
    fn from_json(&self, text: &str) -> Result<Option<T>, CodecError> {
        let mut deserializer = serde_json::Deserializer::from_str(text);
        let mut unknown: Option<String> = None;

        let value: Option<T> = serde_ignored::deserialize(&mut deserializer, |path| {
            if unknown.is_none() {
                unknown = Some(json_path(&path));
            }
        })?;
        deserializer.end()?;

        match unknown {
            Some(path) if self.fail_on_unknown => Err(CodecError::UnknownField { path }),
            _ => Ok(value),
        }
    }

    fn to_json(&self, value: &T) -> Result<String, CodecError> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        text.map_err(|err| CodecError::Serialization(err.to_string()))
    }

    fn fail_on_unknown(mut self) -> Self {
        self.fail_on_unknown = true;
        self
    }
}

/// Render a skipped key's location as `$.field[index].field`
fn json_path(path: &Path<'_>) -> String {
    match path {
        Path::Root => "$".to_string(),
        Path::Seq { parent, index } => format!("{}[{}]", json_path(parent), index),
        Path::Map { parent, key } => format!("{}.{}", json_path(parent), key),
        Path::Some { parent }
        | Path::NewtypeStruct { parent }
        | Path::NewtypeVariant { parent } => json_path(parent),
    }
}
