//! Lookup seams for the two metadata sources the resolver cross-references.
//!
//! Discovery of identities and services happens elsewhere; by the time a
//! controller is resolved these lookups must already be fully populated.

use crate::{
    model::{IdentityInfo, ServiceInfo},
    types::TypeRef,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

///
/// IdentityProvider
///

pub trait IdentityProvider {
    fn identity_for(&self, entity: &TypeRef) -> Option<&IdentityInfo>;
}

///
/// ServiceRegistry
///

pub trait ServiceRegistry {
    fn service_for(&self, entity: &TypeRef) -> Option<&ServiceInfo>;
}

macro_rules! impl_lookup {
    ($trait:ident, $method:ident, $value:ty) => {
        impl $trait for BTreeMap<TypeRef, $value> {
            fn $method(&self, entity: &TypeRef) -> Option<&$value> {
                self.get(entity)
            }
        }

        impl<S: BuildHasher> $trait for HashMap<TypeRef, $value, S> {
            fn $method(&self, entity: &TypeRef) -> Option<&$value> {
                self.get(entity)
            }
        }

        impl<S: BuildHasher> $trait for IndexMap<TypeRef, $value, S> {
            fn $method(&self, entity: &TypeRef) -> Option<&$value> {
                self.get(entity)
            }
        }
    };
}

impl_lookup!(IdentityProvider, identity_for, IdentityInfo);
impl_lookup!(ServiceRegistry, service_for, ServiceInfo);

///
/// EntityCatalog
///
/// In-memory identity and service metadata, usually loaded alongside the
/// controller declarations.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EntityCatalog {
    #[serde(default)]
    pub identities: BTreeMap<TypeRef, IdentityInfo>,

    #[serde(default)]
    pub services: BTreeMap<TypeRef, ServiceInfo>,
}

impl EntityCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_identity(mut self, entity: impl Into<TypeRef>, identity: IdentityInfo) -> Self {
        self.identities.insert(entity.into(), identity);
        self
    }

    #[must_use]
    pub fn with_service(mut self, entity: impl Into<TypeRef>, service: ServiceInfo) -> Self {
        self.services.insert(entity.into(), service);
        self
    }
}

impl IdentityProvider for EntityCatalog {
    fn identity_for(&self, entity: &TypeRef) -> Option<&IdentityInfo> {
        self.identities.get(entity)
    }
}

impl ServiceRegistry for EntityCatalog {
    fn service_for(&self, entity: &TypeRef) -> Option<&ServiceInfo> {
        self.services.get(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_answers_both_lookups() {
        let catalog = EntityCatalog::new()
            .with_identity("shop::Order", IdentityInfo::new("id", "u64"))
            .with_service("shop::Order", ServiceInfo::new("shop::OrderService"));
        let order = TypeRef::new("shop::Order");

        assert_eq!(
            catalog.identity_for(&order).map(|i| i.field.as_str()),
            Some("id")
        );
        assert_eq!(
            catalog.service_for(&order).map(|s| s.destination.simple_name()),
            Some("OrderService")
        );
        assert!(catalog.service_for(&TypeRef::new("shop::Item")).is_none());
    }

    #[test]
    fn std_maps_act_as_registries() {
        let mut services = HashMap::new();
        services.insert(
            TypeRef::new("shop::Item"),
            ServiceInfo::new("shop::ItemService"),
        );
        let registry: &dyn ServiceRegistry = &services;

        assert!(registry.service_for(&TypeRef::new("shop::Item")).is_some());
        assert!(registry.service_for(&TypeRef::new("shop::Tag")).is_none());
    }
}
