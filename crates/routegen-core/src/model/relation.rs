use crate::types::TypeRef;
use serde::{Deserialize, Serialize};

///
/// RelationInfo
///
/// One navigable hop from a parent entity to a child entity through a named
/// field. Order within a chain defines the nesting of the request path.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RelationInfo {
    #[serde(rename = "field")]
    pub field_name: String,
    pub child: TypeRef,
}

impl RelationInfo {
    #[must_use]
    pub fn new(field_name: impl Into<String>, child: impl Into<TypeRef>) -> Self {
        Self {
            field_name: field_name.into(),
            child: child.into(),
        }
    }
}
