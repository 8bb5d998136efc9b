//! jsonmatch-macros - Procedural macros for jsonmatch
//!
//! This crate provides:
//! - `#[derive(JsonType)]` - Declare the type tag and adapter kind for a matcher target

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Options for the JsonType derive macro
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(json_type))]
struct JsonTypeOpts {
    ident: syn::Ident,
    generics: syn::Generics,

    /// Diagnostic type name (defaults to the type identifier)
    #[darling(default)]
    name: Option<String>,

    /// Require a codec with reflective adapters enabled
    #[darling(default)]
    reflective: bool,

    /// Path to the crate exporting `JsonType` (defaults to `::jsonmatch`)
    #[darling(default, rename = "crate")]
    krate: Option<syn::Path>,
}

/// Derive macro for matcher target types
///
/// Implements `JsonType` with an explicit type name. The type must also
/// implement `Serialize` and `Deserialize`.
///
/// # Example
///
/// ```ignore
/// #[derive(JsonType, Serialize, Deserialize)]
/// struct Bar {
///     key: String,
///     count: i32,
/// }
///
/// #[derive(JsonType, Serialize, Deserialize)]
/// #[json_type(name = "foo", reflective)]
/// struct Foo {
///     id: i32,
///     name: String,
/// }
/// ```
#[proc_macro_derive(JsonType, attributes(json_type))]
pub fn derive_json_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_json_type(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => TokenStream::from(e.write_errors()),
    }
}

fn expand_json_type(input: &DeriveInput) -> darling::Result<proc_macro2::TokenStream> {
    let opts = JsonTypeOpts::from_derive_input(input)?;

    let name = &opts.ident;
    let (impl_generics, ty_generics, where_clause) = opts.generics.split_for_impl();

    let type_name = opts.name.unwrap_or_else(|| name.to_string());
    let krate = opts
        .krate
        .unwrap_or_else(|| syn::parse_quote!(::jsonmatch));
    let kind = if opts.reflective {
        quote!(Reflective)
    } else {
        quote!(Generated)
    };

    Ok(quote! {
        impl #impl_generics #krate::JsonType for #name #ty_generics #where_clause {
            fn type_name() -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(#type_name)
            }

            fn adapter_kind() -> #krate::AdapterKind {
                #krate::AdapterKind::#kind
            }
        }
    })
}
