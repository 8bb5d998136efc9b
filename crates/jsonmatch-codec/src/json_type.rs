//! Target type descriptors

use serde::{Serialize, de::DeserializeOwned};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// How a codec obtains the conversion routine for a type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterKind {
    /// Primitive or standard library type the codec always supports
    Builtin,
    /// Adapter generated at compile time (e.g. `#[derive(JsonType)]`)
    Generated,
    /// Adapter the codec must build on demand; only available when the codec
    /// was configured for it
    Reflective,
}

/// A value type a codec can convert to and from JSON
///
/// The type name is an explicit tag supplied by the type, not derived from
/// runtime introspection. It is used for adapter registration and in matcher
/// descriptions.
pub trait JsonType: Serialize + DeserializeOwned + 'static {
    /// Diagnostic name of the type
    fn type_name() -> Cow<'static, str>;

    /// How the adapter for this type is obtained
    fn adapter_kind() -> AdapterKind {
        AdapterKind::Generated
    }
}

macro_rules! builtin_json_type {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl JsonType for $ty {
                fn type_name() -> Cow<'static, str> {
                    Cow::Borrowed($name)
                }

                fn adapter_kind() -> AdapterKind {
                    AdapterKind::Builtin
                }
            }
        )*
    };
}

builtin_json_type! {
    String => "String",
    bool => "bool",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    f32 => "f32",
    f64 => "f64",
    serde_json::Value => "JsonValue",
}

/// Arrays are named `<element>[]`; an unnamed element type yields `"[]"`
impl<T: JsonType> JsonType for Vec<T> {
    fn type_name() -> Cow<'static, str> {
        Cow::Owned(format!("{}[]", T::type_name()))
    }

    fn adapter_kind() -> AdapterKind {
        T::adapter_kind()
    }
}

impl<V: JsonType> JsonType for BTreeMap<String, V> {
    fn type_name() -> Cow<'static, str> {
        Cow::Owned(format!("Map<String, {}>", V::type_name()))
    }

    fn adapter_kind() -> AdapterKind {
        V::adapter_kind()
    }
}
