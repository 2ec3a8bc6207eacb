use crate::types::TypeRef;
use indexmap::{IndexMap, map::Values};
use routegen_utils::case::uncapitalize;
use serde::{Deserialize, Serialize};

///
/// ServiceInfo
/// Resolved service descriptor for one entity; `destination` is the service type.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceInfo {
    pub destination: TypeRef,
}

impl ServiceInfo {
    #[must_use]
    pub fn new(destination: impl Into<TypeRef>) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}

///
/// ServiceBinding
///
/// A handle the generated controller holds to the service of `entity`,
/// exposed as field `field_name` of type `service`.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct ServiceBinding {
    pub entity: TypeRef,
    pub field_name: String,
    pub service: TypeRef,
}

impl ServiceBinding {
    /// Bind `entity` to `service`; the field name is the service's simple
    /// name with its first character lower-cased.
    #[must_use]
    pub fn new(entity: TypeRef, service: TypeRef) -> Self {
        let field_name = uncapitalize(service.simple_name());

        Self {
            entity,
            field_name,
            service,
        }
    }

    #[must_use]
    pub fn for_service(entity: TypeRef, info: &ServiceInfo) -> Self {
        Self::new(entity, info.destination.clone())
    }
}

///
/// ServiceBindingTable
///
/// Bindings keyed by entity type, iterated in insertion order.
/// Re-inserting an entity keeps its original position and binding.
/// Equality is order-sensitive: two tables are equal only when they hold the
/// same bindings in the same order.
///

#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ServiceBindingTable {
    bindings: IndexMap<TypeRef, ServiceBinding>,
}

impl ServiceBindingTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding; returns `false` if its entity was already present.
    pub fn insert(&mut self, binding: ServiceBinding) -> bool {
        if self.bindings.contains_key(&binding.entity) {
            return false;
        }
        self.bindings.insert(binding.entity.clone(), binding);

        true
    }

    #[must_use]
    pub fn get(&self, entity: &TypeRef) -> Option<&ServiceBinding> {
        self.bindings.get(entity)
    }

    #[must_use]
    pub fn contains(&self, entity: &TypeRef) -> bool {
        self.bindings.contains_key(entity)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> Values<'_, TypeRef, ServiceBinding> {
        self.bindings.values()
    }

    pub fn entities(&self) -> impl Iterator<Item = &TypeRef> {
        self.bindings.keys()
    }
}

impl PartialEq for ServiceBindingTable {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.bindings.iter().eq(other.bindings.iter())
    }
}

impl Eq for ServiceBindingTable {}

impl<'a> IntoIterator for &'a ServiceBindingTable {
    type Item = &'a ServiceBinding;
    type IntoIter = Values<'a, TypeRef, ServiceBinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
