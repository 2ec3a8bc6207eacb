//! Controller declarations loaded from JSON.
//!
//! A declaration names the root entity, its service, the base path and the
//! endpoint kind; detail controllers also list their relation hops. The
//! catalog alongside supplies identities and detail services.

use crate::{
    error::ResolveError,
    model::{RelationInfo, ResolvedController, ServiceInfo},
    registry::{EntityCatalog, IdentityProvider, ServiceRegistry},
    resolve::PathBindingResolver,
    types::{Endpoint, EndpointKind, TypeRef},
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use tracing::debug;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid generation config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

///
/// ControllerDecl
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerDecl {
    pub entity: TypeRef,
    pub service: TypeRef,
    pub path: String,
    pub kind: EndpointKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<RelationInfo>>,
}

impl ControllerDecl {
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::from_parts(self.kind, self.details.clone())
    }

    /// Resolve against `catalog`, which must know the root identity and the
    /// service of every detail entity.
    pub fn resolve<C>(&self, catalog: &C) -> Result<ResolvedController, ResolveError>
    where
        C: IdentityProvider + ServiceRegistry,
    {
        let identity =
            catalog
                .identity_for(&self.entity)
                .ok_or_else(|| ResolveError::MissingIdentity {
                    entity: self.entity.clone(),
                })?;
        let service = ServiceInfo::new(self.service.clone());

        PathBindingResolver::new(&self.entity, &service, &self.path, identity, catalog)
            .resolve(self.endpoint())
    }
}

///
/// GenerationConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    #[serde(default)]
    pub catalog: EntityCatalog,

    #[serde(default)]
    pub controllers: Vec<ControllerDecl>,
}

impl GenerationConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Resolve each declaration on its own, in declaration order. One bad
    /// declaration does not prevent the others from resolving.
    #[must_use]
    pub fn resolve_all(&self) -> Vec<Result<ResolvedController, ResolveError>> {
        let results: Vec<_> = self
            .controllers
            .iter()
            .map(|decl| decl.resolve(&self.catalog))
            .collect();

        debug!(
            controllers = results.len(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "resolved generation config"
        );

        results
    }

    /// Resolve every declaration, stopping at the first failure.
    pub fn try_resolve_all(&self) -> Result<Vec<ResolvedController>, ConfigError> {
        self.controllers
            .iter()
            .map(|decl| decl.resolve(&self.catalog).map_err(ConfigError::from))
            .collect()
    }
}
