//! Attribute parsing for `#[load(...)]` annotations.
//!
//! This module extracts configuration attributes from structs and their fields
//! during macro expansion. Unknown keys are reported as compile errors.

use quote::ToTokens;
use syn::{Attribute, Field, Lit};

/// Parsed struct-level `#[load(...)]` attributes.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prepended to every environment variable name.
    pub prefix: String,
}

impl StructAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("load") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // prefix = "..."
                if meta.path.is_ident("prefix") {
                    parsed.prefix = parse_str(&meta)?;
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level load attribute"))
            })?;
        }

        Ok(parsed)
    }
}

/// Parsed `#[load(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Custom environment variable name override.
    ///
    /// If `None`, the field name is converted to UPPER_SNAKE_CASE.
    pub name: Option<String>,

    /// Explicit default expression. `None` means `Default::default()`.
    pub default: Option<proc_macro2::TokenStream>,

    /// List separator for `Vec<String>` fields.
    pub separator: Option<String>,

    /// Custom parser function path (e.g., `"serde_json::from_str"`).
    ///
    /// When specified, bypasses `FromStr` and uses this function instead.
    pub parser: Option<String>,
}

impl FieldAttrs {
    /// Extract and parse `#[load(...)]` attributes from a struct field.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("load") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // name = "..."
                if meta.path.is_ident("name") {
                    attrs.name = Some(parse_str(&meta)?);
                    return Ok(());
                }

                // default or default = value
                if meta.path.is_ident("default") {
                    if meta.input.peek(syn::Token![=]) {
                        let value = meta.value()?;
                        let expr: syn::Expr = value.parse()?;
                        attrs.default = Some(expr.into_token_stream());
                    }
                    return Ok(());
                }

                // separator = "..."
                if meta.path.is_ident("separator") {
                    attrs.separator = Some(parse_str(&meta)?);
                    return Ok(());
                }

                // parser = "function::path"
                if meta.path.is_ident("parser") {
                    attrs.parser = Some(parse_str(&meta)?);
                    return Ok(());
                }

                Err(meta.error("unsupported load attribute"))
            })?;
        }

        Ok(attrs)
    }
}

fn parse_str(meta: &syn::meta::ParseNestedMeta) -> syn::Result<String> {
    let value = meta.value()?;
    match value.parse::<Lit>()? {
        Lit::Str(s) => Ok(s.value()),
        other => Err(syn::Error::new_spanned(other, "expected a string literal")),
    }
}
