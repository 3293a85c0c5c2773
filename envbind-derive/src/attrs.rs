//! Attribute parsing for `#[env("...")]` annotations.
//!
//! The tag text is passed through verbatim; its micro-syntax is interpreted
//! at runtime by `envbind::TagDirectives`.

use syn::{Field, LitStr};

/// Parsed `#[env(...)]` attribute from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Raw tag text, e.g. `"AUTH"` or `",required default=John\\sDoe"`.
    ///
    /// Empty when the field carries no `env` attribute.
    pub tag: String,
}

impl FieldAttrs {
    /// Extract the `#[env("...")]` attribute from a struct field.
    ///
    /// Attributes other than `env` are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut tag: Option<LitStr> = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            if tag.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate env attribute, combine directives into one tag",
                ));
            }

            let lit = attr.parse_args::<LitStr>().map_err(|e| {
                syn::Error::new(
                    e.span(),
                    "expected a string literal tag, e.g. #[env(\"NAME,required\")]",
                )
            })?;
            tag = Some(lit);
        }

        Ok(Self {
            tag: tag.map(|lit| lit.value()).unwrap_or_default(),
        })
    }
}
