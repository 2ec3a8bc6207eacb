use crate::{BuildError, ControllerBuilder};
use proc_macro2::TokenStream;
use quote::quote;
use routegen_core::{model::ServiceBinding, types::TypeRef};
use routegen_utils::case::to_snake_ident;
use std::collections::BTreeSet;
use syn::{Ident, Path, parse_str};

// One `pub` field per binding, root first. A binding whose Rust identifier was
// already emitted is skipped, mirroring ensure-field semantics on the
// controller type.
pub fn generate(builder: &ControllerBuilder<'_>) -> Result<TokenStream, BuildError> {
    let mut seen = BTreeSet::new();
    let mut tokens = quote!();

    for binding in builder.ctrl.bindings() {
        let ty = type_path(&binding.service)?;
        let ident = field_ident(binding)?;

        if !seen.insert(ident.to_string()) {
            continue;
        }
        tokens.extend(quote! {
            pub #ident: #ty,
        });
    }

    Ok(tokens)
}

// Snake-cased from the service's simple name so acronyms split on word
// boundaries (`URLService` -> `url_service`).
fn field_ident(binding: &ServiceBinding) -> Result<Ident, BuildError> {
    let name = to_snake_ident(binding.service.simple_name());

    parse_str::<Ident>(&name).map_err(|_| BuildError::InvalidIdent { name })
}

pub(crate) fn type_path(ty: &TypeRef) -> Result<Path, BuildError> {
    parse_str::<Path>(ty.path()).map_err(|source| BuildError::InvalidType {
        path: ty.to_string(),
        source,
    })
}
