use crate::model::{DeriveEnum, DeriveVariant};
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;

impl TryFrom<DeriveEnum> for TokenStream2 {
    type Error = syn::Error;

    fn try_from(value: DeriveEnum) -> Result<Self, Self::Error> {
        let DeriveEnum {
            enum_name,
            variants,
        } = value;

        let kinds: Vec<TokenStream2> = variants
            .iter()
            .map(|DeriveVariant { name, ordinal, .. }| {
                let ordinal = ordinal_tokens(*ordinal);
                quote! { (#name, #ordinal) }
            })
            .collect();
        let from_arms: Vec<TokenStream2> = variants
            .iter()
            .map(|DeriveVariant { ident, ordinal, .. }| {
                let ordinal = ordinal_tokens(*ordinal);
                quote! { ::argmap::Value::Enum { ordinal: #ordinal, .. } => Some(#enum_name::#ident), }
            })
            .collect();
        let into_arms: Vec<TokenStream2> = variants
            .iter()
            .map(
                |DeriveVariant {
                     ident,
                     name,
                     ordinal,
                 }| {
                    let ordinal = ordinal_tokens(*ordinal);
                    quote! { #enum_name::#ident => ::argmap::Value::Enum { ordinal: #ordinal, name: #name }, }
                },
            )
            .collect();
        let zero = match variants.iter().find(|variant| variant.ordinal == 0) {
            Some(DeriveVariant { ident, .. }) => quote! { Some(#enum_name::#ident) },
            None => quote! { None },
        };

        Ok(quote! {
            impl ::argmap::ScalarValue for #enum_name {
                fn kind() -> ::argmap::ScalarKind {
                    ::argmap::ScalarKind::Enum(&[#(#kinds),*])
                }

                fn from_value(value: ::argmap::Value) -> Option<Self> {
                    match value {
                        #(#from_arms)*
                        _ => None,
                    }
                }

                fn into_value(self) -> ::argmap::Value {
                    match self {
                        #(#into_arms)*
                    }
                }

                fn zero() -> Option<Self> {
                    #zero
                }
            }

            impl ::argmap::OptionValue for #enum_name {
                fn type_kind() -> ::argmap::TypeKind {
                    ::argmap::TypeKind::Scalar(<#enum_name as ::argmap::ScalarValue>::kind())
                }

                fn from_value(value: ::argmap::Value) -> Option<Self> {
                    <#enum_name as ::argmap::ScalarValue>::from_value(value)
                }

                fn into_value(self) -> ::argmap::Value {
                    <#enum_name as ::argmap::ScalarValue>::into_value(self)
                }

                fn zero() -> Option<Self> {
                    <#enum_name as ::argmap::ScalarValue>::zero()
                }
            }
        })
    }
}

// Negative ordinals are emitted as `- N`, so they remain valid in pattern position.
fn ordinal_tokens(ordinal: i64) -> TokenStream2 {
    let magnitude = Literal::u64_unsuffixed(ordinal.unsigned_abs());

    if ordinal < 0 {
        quote! { - #magnitude }
    } else {
        quote! { #magnitude }
    }
}
