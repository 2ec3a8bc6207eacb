//! Core of routegen: resolves the request path, service bindings and identity
//! of a generated REST controller from already-resolved entity metadata.
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod resolve;
pub mod types;

pub use error::{ErrorClass, ResolveError};

///
/// Prelude
///
/// Domain vocabulary only; errors and configuration stay in their modules.
///

pub mod prelude {
    pub use crate::{
        model::{
            IdentityInfo, LastLevel, RelationInfo, ResolvedController, ServiceBinding,
            ServiceBindingTable, ServiceInfo,
        },
        registry::{EntityCatalog, IdentityProvider, ServiceRegistry},
        resolve::PathBindingResolver,
        types::{Endpoint, EndpointKind, TypeRef},
    };
}
