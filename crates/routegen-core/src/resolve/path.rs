use crate::{
    error::ResolveError,
    model::RelationInfo,
    types::{Endpoint, TypeRef},
};
use routegen_utils::case::uncapitalize;

/// Build the request path template for `endpoint`, rooted at the lower-cased
/// base path.
pub(crate) fn request_path(
    base_path: &str,
    root: &TypeRef,
    endpoint: &Endpoint,
) -> Result<String, ResolveError> {
    let base = base_path.to_lowercase();

    let path = match endpoint {
        Endpoint::Collection => base,
        Endpoint::Item => format!("{base}/{}", id_segment(root)),
        Endpoint::Search => format!("{base}/search"),
        Endpoint::Detail(chain) => detail_path(base, root, chain)?,
    };

    Ok(path)
}

// Every ancestor contributes its identifier placeholder followed by the
// relation field leading to the next level.
fn detail_path(
    mut path: String,
    root: &TypeRef,
    chain: &[RelationInfo],
) -> Result<String, ResolveError> {
    if chain.is_empty() {
        return Err(ResolveError::MissingDetails {
            entity: root.clone(),
        });
    }

    let mut current = root;
    for relation in chain {
        path.push('/');
        path.push_str(&id_segment(current));
        path.push('/');
        path.push_str(&relation.field_name);

        current = &relation.child;
    }

    Ok(path)
}

// `{order}` for `shop::Order`
fn id_segment(entity: &TypeRef) -> String {
    format!("{{{}}}", uncapitalize(entity.simple_name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> TypeRef {
        TypeRef::new("shop::Order")
    }

    #[test]
    fn item_path_appends_identifier_placeholder() {
        let path = request_path("pets", &TypeRef::new("zoo::Pet"), &Endpoint::Item);

        assert_eq!(path.ok().as_deref(), Some("pets/{pet}"));
    }

    #[test]
    fn collection_and_search_paths_are_lower_cased() {
        let pet = TypeRef::new("zoo::Pet");

        assert_eq!(
            request_path("Pets", &pet, &Endpoint::Collection).ok().as_deref(),
            Some("pets")
        );
        assert_eq!(
            request_path("PETS", &pet, &Endpoint::Search).ok().as_deref(),
            Some("pets/search")
        );
    }

    #[test]
    fn detail_path_walks_each_level() {
        let chain = vec![
            RelationInfo::new("items", "shop::Item"),
            RelationInfo::new("tags", "shop::Tag"),
        ];
        let path = request_path("Orders", &order(), &Endpoint::Detail(chain));

        assert_eq!(
            path.ok().as_deref(),
            Some("orders/{order}/items/{item}/tags")
        );
    }

    #[test]
    fn detail_field_names_keep_their_case() {
        let chain = vec![RelationInfo::new("lineItems", "shop::LineItem")];
        let path = request_path("orders", &order(), &Endpoint::Detail(chain));

        assert_eq!(path.ok().as_deref(), Some("orders/{order}/lineItems"));
    }

    #[test]
    fn empty_detail_chain_is_rejected() {
        let err = request_path("orders", &order(), &Endpoint::Detail(Vec::new())).unwrap_err();

        assert_eq!(err, ResolveError::MissingDetails { entity: order() });
    }
}
