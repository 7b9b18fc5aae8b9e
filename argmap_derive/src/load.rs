use std::collections::HashSet;

use crate::model::{DeriveEnum, DeriveVariant};
use crate::{ATTRIBUTE_ARGMAP, MACRO_ARG_ENUM};

impl TryFrom<syn::DeriveInput> for DeriveEnum {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let enum_name = value.ident;

        let data = match value.data {
            syn::Data::Enum(data) => data,
            _ => {
                return Err(syn::Error::new(
                    enum_name.span(),
                    format!("Invalid - {MACRO_ARG_ENUM} only applies to 'enum' data structures."),
                ))
            }
        };

        let mut variants: Vec<DeriveVariant> = Vec::default();
        let mut names: HashSet<String> = HashSet::default();
        let mut next_ordinal: i64 = 0;

        for variant in data.variants.iter() {
            if !matches!(variant.fields, syn::Fields::Unit) {
                return Err(syn::Error::new(
                    variant.ident.span(),
                    format!("Invalid - {MACRO_ARG_ENUM} only applies to unit variants."),
                ));
            }

            let ordinal = match &variant.discriminant {
                Some((_, expr)) => discriminant(expr)?,
                None => next_ordinal,
            };
            next_ordinal = ordinal.wrapping_add(1);

            let name = variant_name(variant)?;

            if !names.insert(name.to_lowercase()) {
                return Err(syn::Error::new(
                    variant.ident.span(),
                    format!("Invalid - the variant name '{name}' is repeated (names are case-insensitive)."),
                ));
            }

            variants.push(DeriveVariant {
                ident: variant.ident.clone(),
                name,
                ordinal,
            });
        }

        Ok(DeriveEnum {
            enum_name,
            variants,
        })
    }
}

fn discriminant(expr: &syn::Expr) -> Result<i64, syn::Error> {
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(int),
            ..
        }) => int.base10_parse::<i64>(),
        syn::Expr::Unary(syn::ExprUnary {
            op: syn::UnOp::Neg(_),
            expr,
            ..
        }) => discriminant(expr).map(|ordinal| -ordinal),
        syn::Expr::Paren(syn::ExprParen { expr, .. }) | syn::Expr::Group(syn::ExprGroup { expr, .. }) => {
            discriminant(expr)
        }
        _ => Err(syn::Error::new_spanned(
            expr,
            format!("Invalid - {MACRO_ARG_ENUM} discriminants must be integer literals."),
        )),
    }
}

fn variant_name(variant: &syn::Variant) -> Result<String, syn::Error> {
    let mut name = variant.ident.to_string();

    for attribute in &variant.attrs {
        if attribute.path().is_ident(ATTRIBUTE_ARGMAP) {
            attribute.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: syn::LitStr = meta.value()?.parse()?;
                    name = value.value();
                    Ok(())
                } else {
                    Err(meta.error("Invalid - unsupported argmap attribute."))
                }
            })?;
        }
    }

    if name.is_empty() {
        return Err(syn::Error::new(
            variant.ident.span(),
            "Invalid - the variant name cannot be empty.",
        ));
    }

    Ok(name)
}
