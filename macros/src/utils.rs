//! Utility functions for procedural macros
//!
//! This module contains helpers used by the `disease_stage` macro, such as
//! attribute parsing and method signature checks.

use darling::{ast::NestedMeta, FromMeta};
use quote::ToTokens;
use syn::{Attribute, FnArg, LitStr, Meta, Signature, Type};

/// Arguments of `#[categorizer(risk_factor = "...")]`
#[derive(Debug, FromMeta)]
struct CategorizerArgs {
    risk_factor: String,
}

/// Check if an attribute is the `#[categorizer]` helper
pub fn is_categorizer_attr(attr: &Attribute) -> bool {
    attr.path().is_ident("categorizer")
}

/// Extract the risk factor from `#[categorizer("...")]` or `#[categorizer(risk_factor = "...")]`
pub fn parse_risk_factor(attr: &Attribute) -> syn::Result<String> {
    let Meta::List(list) = &attr.meta else {
        return Err(syn::Error::new_spanned(
            attr,
            "expected #[categorizer(\"risk_factor\")]",
        ));
    };

    let risk_factor = match syn::parse2::<LitStr>(list.tokens.clone()) {
        Ok(lit) => lit.value(),
        Err(_) => {
            let nested = NestedMeta::parse_meta_list(list.tokens.clone())?;
            CategorizerArgs::from_list(&nested)
                .map_err(|err| syn::Error::new_spanned(attr, err.to_string()))?
                .risk_factor
        }
    };

    if risk_factor.trim().is_empty() {
        return Err(syn::Error::new_spanned(attr, "risk factor must not be empty"));
    }

    Ok(risk_factor)
}

/// Check that a categorizer has the shape `fn(&self, patient: &Patient) -> Category`
pub fn validate_categorizer_signature(sig: &Signature) -> syn::Result<()> {
    if sig.asyncness.is_some() {
        return Err(syn::Error::new_spanned(sig, "a categorizer cannot be async"));
    }
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "a categorizer cannot be generic",
        ));
    }
    if sig.inputs.len() != 2 {
        return Err(syn::Error::new_spanned(
            &sig.inputs,
            "a categorizer takes `&self` and a patient",
        ));
    }

    match sig.inputs.first() {
        Some(FnArg::Receiver(receiver))
            if receiver.reference.is_some() && receiver.mutability.is_none() => {}
        Some(other) => {
            return Err(syn::Error::new_spanned(
                other,
                "a categorizer must take `&self`",
            ));
        }
        None => unreachable!("length checked above"),
    }

    if let syn::ReturnType::Default = sig.output {
        return Err(syn::Error::new_spanned(
            sig,
            "a categorizer must return a category",
        ));
    }

    Ok(())
}

/// Name of a type as written, without its module path
pub fn type_name(ty: &Type) -> String {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map_or_else(|| ty.to_token_stream().to_string(), |segment| segment.ident.to_string()),
        _ => ty.to_token_stream().to_string(),
    }
}
