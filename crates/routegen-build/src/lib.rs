//! Token emission for resolved controllers.
//!
//! Only declarations are produced: one field per service binding and the
//! constants describing the request mapping. Handler bodies belong to the
//! downstream generator.

mod fields;
mod mapping;

use proc_macro2::TokenStream;
use quote::quote;
use routegen_core::model::ResolvedController;
use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("'{name}' is not a valid field identifier")]
    InvalidIdent { name: String },

    #[error("'{path}' is not a valid type path: {source}")]
    InvalidType { path: String, source: syn::Error },
}

/// Render the controller declarations as source text.
pub fn generate(ctrl: &ResolvedController) -> Result<String, BuildError> {
    let tokens = ControllerBuilder::new(ctrl).generate()?;

    Ok(tokens.to_string())
}

///
/// ControllerBuilder
///

pub struct ControllerBuilder<'a> {
    pub(crate) ctrl: &'a ResolvedController,
}

impl<'a> ControllerBuilder<'a> {
    #[must_use]
    pub const fn new(ctrl: &'a ResolvedController) -> Self {
        Self { ctrl }
    }

    /// Service fields followed by the mapping constants.
    pub fn generate(&self) -> Result<TokenStream, BuildError> {
        let fields = self.service_fields()?;
        let mapping = self.mapping_consts();

        Ok(quote! {
            #fields
            #mapping
        })
    }

    pub fn service_fields(&self) -> Result<TokenStream, BuildError> {
        fields::generate(self)
    }

    #[must_use]
    pub fn mapping_consts(&self) -> TokenStream {
        mapping::generate(self)
    }
}
