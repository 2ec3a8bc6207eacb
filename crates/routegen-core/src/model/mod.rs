//! Value types flowing into and out of the resolver.
//!
//! - `relation`, `identity` and `service` are inputs handed over by the
//!   metadata collaborators, already resolved.
//! - `controller` is the resolver's output, read by code emitters.
pub mod controller;
pub mod identity;
pub mod relation;
pub mod service;

pub use controller::{LastLevel, ResolvedController};
pub use identity::IdentityInfo;
pub use relation::RelationInfo;
pub use service::{ServiceBinding, ServiceBindingTable, ServiceInfo};
