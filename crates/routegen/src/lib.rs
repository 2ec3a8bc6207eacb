//! ## Crate layout
//! - `build`: token emission for resolved controllers.
//! - `core`: types, registries, configuration and the path/binding resolver.
//! - `utils`: case helpers shared by the other crates.
//!
//! The `prelude` module re-exports the vocabulary needed to resolve a
//! controller.

pub use routegen_build as build;
pub use routegen_core as core;
pub use routegen_utils as utils;

use thiserror::Error as ThisError;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BuildError(#[from] build::BuildError),

    #[error(transparent)]
    ConfigError(#[from] core::config::ConfigError),

    #[error(transparent)]
    ResolveError(#[from] core::ResolveError),
}

/// Load a JSON generation config and render every controller it declares,
/// in declaration order. Stops at the first failing controller.
pub fn generate_from_json(json: &str) -> Result<Vec<String>, Error> {
    let config = core::config::GenerationConfig::from_json_str(json)?;

    config
        .try_resolve_all()?
        .iter()
        .map(|ctrl| build::generate(ctrl).map_err(Error::from))
        .collect()
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        config::{ControllerDecl, GenerationConfig},
        prelude::*,
    };
}
