use crate::{
    model::{IdentityInfo, RelationInfo, ServiceBinding, ServiceBindingTable, ServiceInfo},
    types::{EndpointKind, TypeRef},
};
use indexmap::IndexMap;
use serde::Serialize;

///
/// LastLevel
///
/// Deepest level of a detail chain: the relation that reaches it, the entity
/// the controller ultimately operates on, and that entity's binding.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LastLevel {
    pub relation: RelationInfo,
    pub entity: TypeRef,
    pub binding: ServiceBinding,
}

impl LastLevel {
    #[must_use]
    pub const fn service(&self) -> &TypeRef {
        &self.binding.service
    }
}

///
/// ResolvedController
///
/// Immutable result of one resolution. Detail tables are populated only for
/// detail controllers; every other kind carries empty tables and no last level.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ResolvedController {
    pub(crate) root_entity: TypeRef,
    pub(crate) root_service: ServiceInfo,
    pub(crate) root_binding: ServiceBinding,
    pub(crate) identity: IdentityInfo,
    pub(crate) kind: EndpointKind,
    pub(crate) base_path: String,
    pub(crate) request_path: String,
    pub(crate) detail_chain: Vec<RelationInfo>,
    pub(crate) detail_bindings: ServiceBindingTable,
    pub(crate) detail_services: IndexMap<TypeRef, ServiceInfo>,
    pub(crate) last_level: Option<LastLevel>,
}

impl ResolvedController {
    #[must_use]
    pub const fn root_entity(&self) -> &TypeRef {
        &self.root_entity
    }

    #[must_use]
    pub const fn root_service(&self) -> &ServiceInfo {
        &self.root_service
    }

    #[must_use]
    pub const fn root_binding(&self) -> &ServiceBinding {
        &self.root_binding
    }

    #[must_use]
    pub fn identifier_field(&self) -> &str {
        &self.identity.field
    }

    #[must_use]
    pub const fn identifier_type(&self) -> &TypeRef {
        &self.identity.ty
    }

    #[must_use]
    pub const fn kind(&self) -> EndpointKind {
        self.kind
    }

    /// Base path exactly as declared, before normalization.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    #[must_use]
    pub fn request_path(&self) -> &str {
        &self.request_path
    }

    #[must_use]
    pub fn detail_chain(&self) -> &[RelationInfo] {
        &self.detail_chain
    }

    #[must_use]
    pub const fn detail_bindings(&self) -> &ServiceBindingTable {
        &self.detail_bindings
    }

    #[must_use]
    pub const fn last_level(&self) -> Option<&LastLevel> {
        self.last_level.as_ref()
    }

    /// Root entity resolves to the root binding; anything else goes through
    /// the detail table.
    #[must_use]
    pub fn binding_for(&self, entity: &TypeRef) -> Option<&ServiceBinding> {
        if *entity == self.root_entity {
            return Some(&self.root_binding);
        }

        self.detail_bindings.get(entity)
    }

    #[must_use]
    pub fn service_info_for(&self, entity: &TypeRef) -> Option<&ServiceInfo> {
        if *entity == self.root_entity {
            return Some(&self.root_service);
        }

        self.detail_services.get(entity)
    }

    /// Root binding followed by the detail bindings in chain order.
    pub fn bindings(&self) -> impl Iterator<Item = &ServiceBinding> {
        std::iter::once(&self.root_binding).chain(self.detail_bindings.iter())
    }
}
