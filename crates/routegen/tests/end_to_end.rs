use routegen::{Error, generate_from_json, prelude::*};
use serde_json::json;

fn shop_config(controllers: serde_json::Value) -> String {
    json!({
        "catalog": {
            "identities": {
                "shop::Order": { "field": "id", "ty": "u64" },
                "zoo::Pet": { "field": "petId", "ty": "uuid::Uuid" }
            },
            "services": {
                "shop::Item": { "destination": "shop::service::ItemService" },
                "shop::Tag": { "destination": "shop::service::TagService" }
            }
        },
        "controllers": controllers
    })
    .to_string()
}

#[test]
fn config_resolves_every_kind() {
    let json = shop_config(json!([
        { "entity": "zoo::Pet", "service": "zoo::PetService", "path": "Pets", "kind": "collection" },
        { "entity": "zoo::Pet", "service": "zoo::PetService", "path": "pets", "kind": "item" },
        { "entity": "zoo::Pet", "service": "zoo::PetService", "path": "pets", "kind": "search" },
        { "entity": "shop::Order", "service": "shop::service::OrderService", "path": "orders",
          "kind": "detail",
          "details": [
              { "field": "items", "child": "shop::Item" },
              { "field": "tags", "child": "shop::Tag" }
          ] }
    ]));
    let config = GenerationConfig::from_json_str(&json).expect("config parses");
    let ctrls = config.try_resolve_all().expect("all controllers resolve");

    let paths: Vec<_> = ctrls.iter().map(ResolvedController::request_path).collect();
    assert_eq!(
        paths,
        [
            "pets",
            "pets/{pet}",
            "pets/search",
            "orders/{order}/items/{item}/tags"
        ]
    );
    assert_eq!(ctrls[1].identifier_field(), "petId");
    assert_eq!(ctrls[1].identifier_type().simple_name(), "Uuid");
}

#[test]
fn generate_from_json_renders_each_controller() {
    let json = shop_config(json!([
        { "entity": "shop::Order", "service": "shop::service::OrderService", "path": "orders",
          "kind": "DETAIL", "details": [ { "field": "items", "child": "shop::Item" } ] }
    ]));
    let sources = generate_from_json(&json).expect("generation succeeds");

    assert_eq!(sources.len(), 1);
    assert!(sources[0].contains("order_service"));
    assert!(sources[0].contains("item_service"));
    assert!(sources[0].contains("\"orders/{order}/items\""));
}

#[test]
fn detail_without_chain_surfaces_as_config_error() {
    let json = shop_config(json!([
        { "entity": "shop::Order", "service": "shop::service::OrderService", "path": "orders",
          "kind": "detail" }
    ]));
    let err = generate_from_json(&json).unwrap_err();

    assert!(matches!(err, Error::ConfigError(_)));
    assert_eq!(
        err.to_string(),
        "missing details information for 'shop::Order'"
    );
}

#[test]
fn resolved_controller_serializes_bindings_in_chain_order() {
    let json = shop_config(json!([
        { "entity": "shop::Order", "service": "shop::service::OrderService", "path": "orders",
          "kind": "detail",
          "details": [
              { "field": "tags", "child": "shop::Tag" },
              { "field": "items", "child": "shop::Item" }
          ] }
    ]));
    let config = GenerationConfig::from_json_str(&json).expect("config parses");
    let ctrl = config.try_resolve_all().expect("resolves").remove(0);

    let text = serde_json::to_string(&ctrl).expect("serializes");
    let tag_at = text.find("\"shop::Tag\":{").expect("tag binding present");
    let item_at = text.find("\"shop::Item\":{").expect("item binding present");
    assert!(tag_at < item_at);

    let value = serde_json::to_value(&ctrl).expect("serializes");
    assert_eq!(value["kind"], "DETAIL");
    assert_eq!(value["request_path"], "orders/{order}/tags/{tag}/items");
    assert_eq!(value["last_level"]["relation"]["field"], "items");
}

#[test]
fn version_is_exported() {
    assert!(!routegen::VERSION.is_empty());
}
