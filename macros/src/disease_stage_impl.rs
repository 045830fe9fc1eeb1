//! `disease_stage` attribute macro implementation
//!
//! This module collects the `#[categorizer(...)]` methods of an inherent
//! `impl` block and generates the `DiseaseStage` trait implementation that
//! declares them.

use darling::{ast::NestedMeta, FromMeta};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ImplItem, ItemImpl};

use crate::utils;

/// Options from the `#[disease_stage(...)]` attribute
#[derive(Debug, Default, FromMeta)]
struct DiseaseStageArgs {
    /// Display name of the stage, defaults to the type name
    #[darling(default)]
    name: Option<String>,
    /// Parent stage whose categorizers are inherited
    #[darling(default)]
    extends: Option<syn::Path>,
}

/// A tagged method found in the impl block
struct CategorizerMethod {
    risk_factor: String,
    ident: syn::Ident,
}

/// Process the `disease_stage` attribute macro
pub fn process_disease_stage(args: TokenStream, input: TokenStream) -> TokenStream {
    let attr_args = match NestedMeta::parse_meta_list(args.into()) {
        Ok(attr_args) => attr_args,
        Err(err) => return TokenStream::from(darling::Error::from(err).write_errors()),
    };

    // Parse with darling
    let stage_args = match DiseaseStageArgs::from_list(&attr_args) {
        Ok(stage_args) => stage_args,
        Err(err) => return err.write_errors().into(),
    };

    let mut item_impl = parse_macro_input!(input as ItemImpl);

    match expand_disease_stage(stage_args, &mut item_impl) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_disease_stage(
    stage_args: DiseaseStageArgs,
    item_impl: &mut ItemImpl,
) -> syn::Result<proc_macro2::TokenStream> {
    if let Some((_, trait_path, _)) = &item_impl.trait_ {
        return Err(syn::Error::new_spanned(
            trait_path,
            "#[disease_stage] must be applied to an inherent impl block",
        ));
    }

    let categorizers = collect_categorizers(item_impl)?;

    let self_ty = &item_impl.self_ty;
    let stage_name = stage_args
        .name
        .unwrap_or_else(|| utils::type_name(self_ty));
    let (impl_generics, _, where_clause) = item_impl.generics.split_for_impl();

    let inherit = stage_args.extends.map(|parent| {
        quote! {
            registry.inherit::<#parent>();
        }
    });

    let declarations = categorizers.iter().map(|categorizer| {
        let risk_factor = &categorizer.risk_factor;
        let ident = &categorizer.ident;
        let ident_str = ident.to_string();
        quote! {
            registry.declare(#risk_factor, ::disease_stage::Method::new(#ident_str, Self::#ident));
        }
    });

    Ok(quote! {
        #item_impl

        impl #impl_generics ::disease_stage::DiseaseStage for #self_ty #where_clause {
            const NAME: &'static str = #stage_name;

            #[allow(unused_variables)]
            fn declare_categorizers(registry: &mut ::disease_stage::Registry<Self>) {
                #inherit
                #(#declarations)*
            }
        }
    })
}

/// Strip the `#[categorizer]` helper attributes and record the tagged methods
fn collect_categorizers(item_impl: &mut ItemImpl) -> syn::Result<Vec<CategorizerMethod>> {
    let mut categorizers: Vec<CategorizerMethod> = Vec::new();

    for item in &mut item_impl.items {
        let ImplItem::Fn(method) = item else {
            continue;
        };

        let (tags, attrs): (Vec<_>, Vec<_>) = method
            .attrs
            .drain(..)
            .partition(utils::is_categorizer_attr);
        method.attrs = attrs;

        let Some(tag) = tags.first() else {
            continue;
        };
        if let Some(extra) = tags.get(1) {
            return Err(syn::Error::new_spanned(
                extra,
                "a method can categorize only one risk factor",
            ));
        }

        utils::validate_categorizer_signature(&method.sig)?;
        let risk_factor = utils::parse_risk_factor(tag)?;

        if let Some(existing) = categorizers
            .iter()
            .find(|categorizer| categorizer.risk_factor == risk_factor)
        {
            return Err(syn::Error::new_spanned(
                tag,
                format!(
                    "risk factor '{risk_factor}' is already categorized by `{}`",
                    existing.ident
                ),
            ));
        }

        categorizers.push(CategorizerMethod {
            risk_factor,
            ident: method.sig.ident.clone(),
        });
    }

    Ok(categorizers)
}
