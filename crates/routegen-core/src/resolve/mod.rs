//! Request-path and service-binding resolution for one controller.

mod path;


use crate::{
    error::ResolveError,
    model::{
        IdentityInfo, LastLevel, RelationInfo, ResolvedController, ServiceBinding,
        ServiceBindingTable, ServiceInfo,
    },
    registry::ServiceRegistry,
    types::{Endpoint, TypeRef},
};
use indexmap::IndexMap;
use tracing::{debug, trace};

///
/// PathBindingResolver
///
/// Borrows fully-resolved inputs and turns an [`Endpoint`] into a
/// [`ResolvedController`]. Holds no state of its own, so one resolver can be
/// reused for every endpoint of the same root entity.
///

#[derive(Clone, Copy)]
pub struct PathBindingResolver<'a> {
    root_entity: &'a TypeRef,
    root_service: &'a ServiceInfo,
    base_path: &'a str,
    identity: &'a IdentityInfo,
    services: &'a dyn ServiceRegistry,
}

impl<'a> PathBindingResolver<'a> {
    #[must_use]
    pub fn new(
        root_entity: &'a TypeRef,
        root_service: &'a ServiceInfo,
        base_path: &'a str,
        identity: &'a IdentityInfo,
        services: &'a dyn ServiceRegistry,
    ) -> Self {
        Self {
            root_entity,
            root_service,
            base_path,
            identity,
            services,
        }
    }

    pub fn resolve(&self, endpoint: Endpoint) -> Result<ResolvedController, ResolveError> {
        self.check_inputs()?;

        let kind = endpoint.kind();
        let request_path = path::request_path(self.base_path, self.root_entity, &endpoint)?;
        let root_binding = ServiceBinding::for_service(self.root_entity.clone(), self.root_service);

        let (detail_chain, details) = match endpoint {
            Endpoint::Detail(chain) => {
                let details = self.resolve_details(&chain)?;
                (chain, Some(details))
            }
            Endpoint::Collection | Endpoint::Item | Endpoint::Search => (Vec::new(), None),
        };
        let DetailLevels {
            bindings: detail_bindings,
            services: detail_services,
            last_level,
        } = details.unwrap_or_default();

        debug!(
            entity = %self.root_entity,
            %kind,
            path = %request_path,
            detail_levels = detail_bindings.len(),
            "resolved controller"
        );

        Ok(ResolvedController {
            root_entity: self.root_entity.clone(),
            root_service: self.root_service.clone(),
            root_binding,
            identity: self.identity.clone(),
            kind,
            base_path: self.base_path.to_string(),
            request_path,
            detail_chain,
            detail_bindings,
            detail_services,
            last_level,
        })
    }

    fn check_inputs(&self) -> Result<(), ResolveError> {
        let blank = [
            ("root entity", self.root_entity),
            ("root service", &self.root_service.destination),
            ("identifier", &self.identity.ty),
        ]
        .into_iter()
        .find(|(_, ty)| ty.is_blank());

        if let Some((input, _)) = blank {
            return Err(ResolveError::BlankType {
                entity: self.root_entity.clone(),
                input,
            });
        }
        if self.base_path.trim().is_empty() {
            return Err(ResolveError::EmptyBasePath {
                entity: self.root_entity.clone(),
            });
        }
        if self.identity.field.trim().is_empty() {
            return Err(ResolveError::MissingIdentifier {
                entity: self.root_entity.clone(),
            });
        }

        Ok(())
    }

    // Tables are built fresh for every call; entities keep the position of
    // their first appearance along the chain.
    fn resolve_details(&self, chain: &[RelationInfo]) -> Result<DetailLevels, ResolveError> {
        let mut bindings = ServiceBindingTable::new();
        let mut services = IndexMap::new();

        for relation in chain {
            if relation.child.is_blank() {
                return Err(ResolveError::BlankType {
                    entity: self.root_entity.clone(),
                    input: "detail entity",
                });
            }
            let service = self.services.service_for(&relation.child).ok_or_else(|| {
                ResolveError::MissingService {
                    entity: relation.child.clone(),
                    field: relation.field_name.clone(),
                }
            })?;
            if service.destination.is_blank() {
                return Err(ResolveError::BlankType {
                    entity: relation.child.clone(),
                    input: "detail service",
                });
            }

            trace!(
                field = %relation.field_name,
                child = %relation.child,
                service = %service.destination,
                "detail level"
            );

            services
                .entry(relation.child.clone())
                .or_insert_with(|| service.clone());
            bindings.insert(ServiceBinding::for_service(relation.child.clone(), service));
        }

        let Some(relation) = chain.last() else {
            return Err(ResolveError::MissingDetails {
                entity: self.root_entity.clone(),
            });
        };
        let binding = bindings
            .get(&relation.child)
            .cloned()
            .ok_or_else(|| ResolveError::MissingService {
                entity: relation.child.clone(),
                field: relation.field_name.clone(),
            })?;

        Ok(DetailLevels {
            last_level: Some(LastLevel {
                relation: relation.clone(),
                entity: relation.child.clone(),
                binding,
            }),
            bindings,
            services,
        })
    }
}

///
/// DetailLevels
///

#[derive(Default)]
struct DetailLevels {
    bindings: ServiceBindingTable,
    services: IndexMap<TypeRef, ServiceInfo>,
    last_level: Option<LastLevel>,
}
