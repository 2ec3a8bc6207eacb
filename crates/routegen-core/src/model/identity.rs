use crate::types::TypeRef;
use serde::{Deserialize, Serialize};

///
/// IdentityInfo
/// Identifier field name and type of a managed entity.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IdentityInfo {
    pub field: String,
    pub ty: TypeRef,
}

impl IdentityInfo {
    #[must_use]
    pub fn new(field: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            field: field.into(),
            ty: ty.into(),
        }
    }
}
