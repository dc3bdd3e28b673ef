//! Derive macro implementation for envload

use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// Name of the outermost type, e.g. `Vec` for `Vec<String>`.
fn type_ident(ty: &Type) -> Option<String> {
    if let Type::Path(type_path) = ty {
        if let Some(seg) = type_path.path.segments.last() {
            return Some(seg.ident.to_string());
        }
    }
    None
}

/// `true` for `Vec<String>`, the only list type `load_array` produces.
fn is_string_vec(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    let Some(seg) = type_path.path.segments.last() else {
        return false;
    };
    if seg.ident != "Vec" {
        return false;
    }
    match &seg.arguments {
        syn::PathArguments::AngleBracketed(args) => matches!(
            args.args.first(),
            Some(syn::GenericArgument::Type(inner)) if type_ident(inner).as_deref() == Some("String")
        ),
        _ => false,
    }
}

/// `EnvLoad` derive macro
///
/// Generates `from_env()` and `load_from(&Loader)` on structs. Every field
/// falls back to a default, so neither method can fail.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[load(prefix = "PREFIX_")]`: Add prefix to all env var names
///
/// **Field-level**:
/// - `#[load(name = "CUSTOM_NAME")]`: Custom environment variable name
/// - `#[load(default = value)]`: Fallback value (otherwise `Default::default()`)
/// - `#[load(separator = ";")]`: Separator for `Vec<String>` fields (default `,`)
/// - `#[load(parser = "func")]`: Use a custom parser function
///
/// # Example
///
/// See the `envload` crate documentation for usage examples.
#[proc_macro_derive(EnvLoad, attributes(load))]
pub fn derive_envload(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let struct_attrs = StructAttrs::from_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "EnvLoad only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "EnvLoad only supports structs",
            ));
        }
    };

    let mut field_initializers = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let field_type = &field.ty;
        let attrs = FieldAttrs::from_field(field)?;
        let type_name = type_ident(field_type);

        if type_name.as_deref() == Some("Option") {
            return Err(syn::Error::new_spanned(
                field_type,
                "Option<T> fields are not supported; use a default value instead",
            ));
        }

        let is_list = type_name.as_deref() == Some("Vec");
        if attrs.separator.is_some() && attrs.parser.is_some() {
            return Err(syn::Error::new_spanned(
                field_name,
                "separator cannot be combined with parser",
            ));
        }
        if attrs.separator.is_some() && !is_list {
            return Err(syn::Error::new_spanned(
                field_name,
                "separator is only supported on Vec<String> fields",
            ));
        }
        if is_list && attrs.parser.is_none() && !is_string_vec(field_type) {
            return Err(syn::Error::new_spanned(
                field_type,
                "Vec fields other than Vec<String> require parser",
            ));
        }

        let base_name = attrs
            .name
            .unwrap_or_else(|| field_name.unraw().to_string().to_uppercase());
        let env_var_name = format!("{}{}", struct_attrs.prefix, base_name);

        let default_expr = attrs
            .default
            .unwrap_or_else(|| quote! { ::core::default::Default::default() });

        let load_expr = if let Some(func_path) = attrs.parser {
            let func: syn::Path = syn::parse_str(&func_path).map_err(|e| {
                syn::Error::new_spanned(field, format!("invalid parser path: {e}"))
            })?;
            quote! {
                loader.load_with::<#field_type, _, _>(
                    #env_var_name,
                    #default_expr,
                    |__raw: &str| #func(__raw)
                )
            }
        } else if is_list {
            let separator = attrs.separator.unwrap_or_else(|| ",".to_string());
            quote! {
                loader.load_array(#env_var_name, #separator, #default_expr)
            }
        } else {
            quote! {
                loader.load::<#field_type>(#env_var_name, #default_expr)
            }
        };

        field_initializers.push(quote! {
            #field_name: #load_expr
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            /// Load configuration from the process environment
            ///
            /// Missing or invalid variables fall back to their defaults.
            pub fn from_env() -> Self {
                Self::load_from(&::envload::Loader::system())
            }

            /// Load configuration through `loader`
            pub fn load_from<__E, __D>(loader: &::envload::Loader<__E, __D>) -> Self
            where
                __E: ::envload::EnvSource,
                __D: ::envload::DiagnosticSink,
            {
                Self {
                    #(#field_initializers),*
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand_err(input: DeriveInput) -> String {
        expand(&input).unwrap_err().to_string()
    }

    #[test]
    fn test_is_string_vec() {
        assert!(is_string_vec(&parse_quote!(Vec<String>)));
        assert!(is_string_vec(&parse_quote!(std::vec::Vec<std::string::String>)));
        assert!(!is_string_vec(&parse_quote!(Vec<u32>)));
        assert!(!is_string_vec(&parse_quote!(String)));
    }

    #[test]
    fn test_rejects_tuple_and_unit_structs() {
        let tuple: DeriveInput = parse_quote! { struct Config(u16); };
        let unit: DeriveInput = parse_quote! { struct Config; };

        let message = "EnvLoad only supports structs with named fields";
        assert_eq!(expand_err(tuple), message);
        assert_eq!(expand_err(unit), message);
    }

    #[test]
    fn test_rejects_enums() {
        let input: DeriveInput = parse_quote! {
            enum Mode {
                Fast,
                Slow,
            }
        };

        assert_eq!(expand_err(input), "EnvLoad only supports structs");
    }

    #[test]
    fn test_rejects_option_fields() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                port: Option<u16>,
            }
        };

        assert_eq!(
            expand_err(input),
            "Option<T> fields are not supported; use a default value instead"
        );
    }

    #[test]
    fn test_rejects_separator_with_parser() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[load(separator = ";", parser = "parse_hosts")]
                hosts: Vec<String>,
            }
        };

        assert_eq!(
            expand_err(input),
            "separator cannot be combined with parser"
        );
    }

    #[test]
    fn test_rejects_separator_on_scalar() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[load(separator = ";")]
                port: u16,
            }
        };

        assert_eq!(
            expand_err(input),
            "separator is only supported on Vec<String> fields"
        );
    }

    #[test]
    fn test_rejects_non_string_vec_without_parser() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                ports: Vec<u16>,
            }
        };

        assert_eq!(
            expand_err(input),
            "Vec fields other than Vec<String> require parser"
        );
    }

    #[test]
    fn test_accepts_non_string_vec_with_parser() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[load(parser = "serde_json::from_str")]
                ports: Vec<u16>,
            }
        };

        assert!(expand(&input).is_ok());
    }

    #[test]
    fn test_prefix_applies_to_custom_name() {
        let input: DeriveInput = parse_quote! {
            #[load(prefix = "APP_")]
            struct Config {
                #[load(name = "HOSTS")]
                hosts: Vec<String>,
            }
        };

        let tokens = expand(&input).unwrap().to_string();
        assert!(tokens.contains("\"APP_HOSTS\""));
    }
}
