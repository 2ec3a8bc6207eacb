use crate::{error::ResolveError, model::RelationInfo};
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

///
/// TypeRef
///
/// Fully-qualified type path, e.g. `shop::model::Order`.
/// Serialized as the plain path string.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TypeRef(String);

impl TypeRef {
    /// Wrap a path without validation. Intended for literals.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Validate and wrap a path coming from untrusted input.
    pub fn parse(path: &str) -> Result<Self, ResolveError> {
        let trimmed = path.trim();
        let valid = !trimmed.is_empty()
            && trimmed
                .split("::")
                .all(|segment| !segment.is_empty() && !segment.contains(char::is_whitespace));

        if valid {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ResolveError::InvalidType {
                path: path.to_string(),
            })
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }

    /// True when the path has no usable simple name (`""`, `"shop::"`).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.simple_name().trim().is_empty()
    }

    /// Final path segment (`Order` for `shop::model::Order`).
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.0.rsplit_once("::").map_or(&self.0, |(_, name)| name)
    }
}

impl TryFrom<String> for TypeRef {
    type Error = ResolveError;

    fn try_from(path: String) -> Result<Self, Self::Error> {
        Self::parse(&path)
    }
}

impl From<TypeRef> for String {
    fn from(ty: TypeRef) -> Self {
        ty.0
    }
}

impl From<&str> for TypeRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

///
/// EndpointKind
///
/// Role of a generated controller. Displays as the upper-case label used in
/// controller declarations.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "String", rename_all = "UPPERCASE")]
pub enum EndpointKind {
    #[display("COLLECTION")]
    Collection,

    #[display("ITEM")]
    Item,

    #[display("SEARCH")]
    Search,

    #[display("DETAIL")]
    Detail,
}

impl EndpointKind {
    pub const ALL: [Self; 4] = [Self::Collection, Self::Item, Self::Search, Self::Detail];

    #[must_use]
    pub const fn is_detail(self) -> bool {
        matches!(self, Self::Detail)
    }
}

impl FromStr for EndpointKind {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();

        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(label))
            .ok_or_else(|| ResolveError::UnsupportedKind {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for EndpointKind {
    type Error = ResolveError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

///
/// Endpoint
///
/// Endpoint role together with the data its request path needs.
/// Only detail endpoints carry a relation chain.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Endpoint {
    Collection,
    Item,
    Search,
    Detail(Vec<RelationInfo>),
}

impl Endpoint {
    /// Build from the loose `(kind, chain)` form found in declarations.
    /// A chain given with a non-detail kind is dropped; a missing chain for
    /// a detail kind is left empty and rejected at resolution.
    #[must_use]
    pub fn from_parts(kind: EndpointKind, chain: Option<Vec<RelationInfo>>) -> Self {
        match kind {
            EndpointKind::Collection => Self::Collection,
            EndpointKind::Item => Self::Item,
            EndpointKind::Search => Self::Search,
            EndpointKind::Detail => Self::Detail(chain.unwrap_or_default()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EndpointKind {
        match self {
            Self::Collection => EndpointKind::Collection,
            Self::Item => EndpointKind::Item,
            Self::Search => EndpointKind::Search,
            Self::Detail(_) => EndpointKind::Detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name_is_last_segment() {
        assert_eq!(TypeRef::new("shop::model::Order").simple_name(), "Order");
        assert_eq!(TypeRef::new("Order").simple_name(), "Order");
    }

    #[test]
    fn blank_paths_have_no_simple_name() {
        assert!(TypeRef::new("").is_blank());
        assert!(TypeRef::new("shop::").is_blank());
        assert!(TypeRef::new("  ").is_blank());
        assert!(!TypeRef::new("shop::Order").is_blank());
    }

    #[test]
    fn parse_rejects_empty_and_malformed_paths() {
        assert!(TypeRef::parse("").is_err());
        assert!(TypeRef::parse("   ").is_err());
        assert!(TypeRef::parse("shop::::Order").is_err());
        assert!(TypeRef::parse("shop::Big Order").is_err());
        assert_eq!(
            TypeRef::parse(" shop::Order ").map(String::from).ok(),
            Some("shop::Order".to_string())
        );
    }

    #[test]
    fn endpoint_kind_parses_any_case() {
        assert_eq!("detail".parse::<EndpointKind>().ok(), Some(EndpointKind::Detail));
        assert_eq!("ITEM".parse::<EndpointKind>().ok(), Some(EndpointKind::Item));
        assert_eq!(
            " Search ".parse::<EndpointKind>().ok(),
            Some(EndpointKind::Search)
        );
    }

    #[test]
    fn endpoint_kind_rejects_unknown_label() {
        let err = "listing".parse::<EndpointKind>().unwrap_err();

        assert_eq!(
            err,
            ResolveError::UnsupportedKind {
                value: "listing".to_string()
            }
        );
    }

    #[test]
    fn endpoint_kind_displays_upper_case_label() {
        assert_eq!(EndpointKind::Collection.to_string(), "COLLECTION");
        assert_eq!(EndpointKind::Detail.to_string(), "DETAIL");
    }

    #[test]
    fn from_parts_drops_chain_for_non_detail_kinds() {
        let chain = vec![RelationInfo::new("items", "shop::Item")];

        assert_eq!(
            Endpoint::from_parts(EndpointKind::Item, Some(chain.clone())),
            Endpoint::Item
        );
        assert_eq!(
            Endpoint::from_parts(EndpointKind::Detail, Some(chain.clone())),
            Endpoint::Detail(chain)
        );
        assert_eq!(
            Endpoint::from_parts(EndpointKind::Detail, None),
            Endpoint::Detail(Vec::new())
        );
    }

    #[test]
    fn endpoint_reports_its_kind() {
        for kind in EndpointKind::ALL {
            assert_eq!(Endpoint::from_parts(kind, None).kind(), kind);
        }
    }
}
