//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type, Visibility};

mod attrs;

use attrs::FieldAttrs;

/// Strip one level of `Option<T>` or `Box<T>`
fn extract_indirect_inner_type(ty: &Type) -> &Type {
    if let Type::Path(type_path) = ty {
        if let Some(seg) = type_path.path.segments.last() {
            if seg.ident != "Option" && seg.ident != "Box" {
                return ty;
            }
            if let syn::PathArguments::AngleBracketed(args) = &seg.arguments {
                if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
                    return inner;
                }
            }
        }
    }
    ty
}

/// `Unmarshal` derive macro
///
/// Implements `envbind::Unmarshal` for a struct with named fields.
///
/// # Supported Attributes
///
/// **Field-level**, `#[env("<name>,<directive> ...")]`:
/// - `#[env("CUSTOM_NAME")]`: Read this variable instead of the derived name
/// - `#[env(",default=value")]`: Value used when the variable is not set (`\s` = space)
/// - `#[env(",required")]`: Fail when the variable is not set and there is no default
/// - `#[env("-")]`: Skip the field
///
/// Fields without explicit visibility are skipped.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(Unmarshal, attributes(env))]
pub fn derive_unmarshal(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    // Struct name
    let struct_name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Unmarshal does not support generic structs",
        ));
    }

    // Extract fields
    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Unmarshal only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Unmarshal only supports structs",
            ));
        }
    };

    // Generate binding code for each exported field
    let mut field_bindings = Vec::with_capacity(fields.len());
    for field in fields {
        let attrs = FieldAttrs::from_field(field)?;

        if matches!(field.vis, Visibility::Inherited) {
            continue;
        }

        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let field_ident = field_name.to_string();
        let field_type = &field.ty;
        let unwrapped_type = extract_indirect_inner_type(field_type);
        let tag = attrs.tag;

        field_bindings.push(quote! {
            if let ::std::option::Option::Some(__binding) =
                ::envbind::__private::Binding::resolve(#field_ident, #tag, __scope, __env)?
            {
                (&&&&::envbind::__private::Probe::<#field_type>::new())
                    .strategy()
                    .apply(
                        &mut self.#field_name,
                        &__binding,
                        __env,
                        ::std::any::type_name::<#unwrapped_type>(),
                    )?;
            }
        });
    }

    Ok(quote! {
        impl ::envbind::Unmarshal for #struct_name {
            fn unmarshal_fields(
                &mut self,
                __env: &::envbind::__private::Env,
                __scope: &::envbind::__private::Scope,
            ) -> ::std::result::Result<(), ::envbind::__private::FieldError> {
                #[allow(unused_imports)]
                use ::envbind::__private::{
                    ViaCoerce as _, ViaHook as _, ViaHookWithoutDefault as _, ViaRecord as _,
                    ViaUnsupported as _,
                };

                #(#field_bindings)*

                ::std::result::Result::Ok(())
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
    fn test_expand_named_struct() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                pub url: String,
                #[env("AUTH")]
                pub auth: Auth,
                secret: String,
            }
        };

        let tokens = expand(&input).unwrap().to_string();
        assert!(tokens.contains("impl :: envbind :: Unmarshal for Config"));
        assert!(tokens.contains("\"url\""));
        assert!(tokens.contains("\"AUTH\""));
        assert!(!tokens.contains("\"secret\""));
    }

    #[test]
    fn test_expand_unit_struct() {
        let input: DeriveInput = parse_quote! {
            struct Empty;
        };

        assert!(expand(&input).is_ok());
    }

    #[test]
    fn test_reject_tuple_struct() {
        let input: DeriveInput = parse_quote! {
            struct Config(pub String);
        };

        assert_eq!(
            expand_err(input),
            "Unmarshal only supports structs with named fields"
        );
    }

    #[test]
    fn test_reject_enum() {
        let input: DeriveInput = parse_quote! {
            enum Config {
                A,
                B,
            }
        };

        assert_eq!(expand_err(input), "Unmarshal only supports structs");
    }

    #[test]
    fn test_reject_generics() {
        let input: DeriveInput = parse_quote! {
            struct Config<T> {
                pub value: T,
            }
        };

        assert_eq!(expand_err(input), "Unmarshal does not support generic structs");
    }

    #[test]
    fn test_invalid_tag_on_private_field_still_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[env(42)]
                value: String,
            }
        };

        assert!(expand_err(input).contains("expected a string literal tag"));
    }

    #[test]
    fn test_extract_indirect_inner_type() {
        let option: Type = parse_quote!(Option<u8>);
        let boxed: Type = parse_quote!(std::boxed::Box<String>);
        let vec: Type = parse_quote!(Vec<u8>);

        let inner: Type = parse_quote!(u8);
        assert_eq!(extract_indirect_inner_type(&option), &inner);
        let inner: Type = parse_quote!(String);
        assert_eq!(extract_indirect_inner_type(&boxed), &inner);
        assert_eq!(extract_indirect_inner_type(&vec), &vec);
    }
}
