//! Tests for the spec accessors and container predicates, inline and through `$ref` proxies.

use serde_json::json;
use swagger_schema::{
    get_default, get_format, has_default, has_format, is_dict_like, is_list_like, is_required,
    JsonRef, RefResolver, SpecNode,
};

fn petstore() -> RefResolver {
    let resolver = RefResolver::new();
    resolver
        .register(
            "",
            json!({
                "definitions": {
                    "PetId": {"type": "integer", "format": "int64", "default": 0},
                    "Tags": ["a", "b"],
                    "Name": "pet name",
                    "Alias": {"$ref": "#/definitions/PetId"}
                }
            }),
        )
        .unwrap();
    resolver
}

#[test]
fn test_is_required_tests_presence_only() {
    assert!(is_required(&json!({"required": false})));
    assert!(is_required(&json!({"required": true})));
    assert!(!is_required(&json!({})));
}

#[test]
fn test_default_accessors() {
    assert!(!has_default(&json!({})));
    assert_eq!(get_default(&json!({})), None);

    let spec = json!({"default": 0});
    assert!(has_default(&spec));
    assert_eq!(get_default(&spec), Some(&json!(0)));
}

#[test]
fn test_null_default_is_present() {
    let spec = json!({"type": "null", "default": null});
    assert!(has_default(&spec));
    assert_eq!(get_default(&spec), Some(&json!(null)));
}

#[test]
fn test_format_accessors() {
    let spec = json!({"type": "string", "format": "date-time"});
    assert!(has_format(&spec));
    assert_eq!(get_format(&spec), Some(&json!("date-time")));

    assert!(!has_format(&json!({"type": "string"})));
    assert_eq!(get_format(&json!({"type": "string"})), None);
}

#[test]
fn test_accessors_on_non_mappings() {
    assert!(!has_default(&json!("default")));
    assert!(!is_required(&json!(["required"])));
    assert_eq!(get_format(&json!(42)), None);
}

#[test]
fn test_accessors_through_proxy() {
    let resolver = petstore();
    let proxy = JsonRef::new("#/definitions/PetId", &resolver);

    assert!(has_default(&proxy));
    assert_eq!(get_default(&proxy), Some(&json!(0)));
    assert_eq!(get_format(&proxy), Some(&json!("int64")));
    assert!(!is_required(&proxy));
}

#[test]
fn test_predicates_on_inline_values() {
    assert!(is_dict_like(&json!({})));
    assert!(is_dict_like(&json!({"type": "string"})));
    assert!(is_list_like(&json!([])));
    assert!(is_list_like(&json!([{"type": "string"}])));

    for scalar in [json!(null), json!(true), json!(1), json!(1.5), json!("s")] {
        assert!(!is_dict_like(&scalar));
        assert!(!is_list_like(&scalar));
    }

    assert!(!is_list_like(&json!({})));
    assert!(!is_dict_like(&json!([])));
}

#[test]
fn test_predicates_on_proxies() {
    let resolver = petstore();

    let mapping = JsonRef::new("#/definitions/PetId", &resolver);
    assert!(is_dict_like(&mapping));
    assert!(!is_list_like(&mapping));

    let sequence = JsonRef::new("#/definitions/Tags", &resolver);
    assert!(is_list_like(&sequence));
    assert!(!is_dict_like(&sequence));

    let scalar = JsonRef::new("#/definitions/Name", &resolver);
    assert!(!is_dict_like(&scalar));
    assert!(!is_list_like(&scalar));
}

#[test]
fn test_proxy_follows_ref_chain() {
    let resolver = petstore();
    let alias = JsonRef::new("#/definitions/Alias", &resolver);

    assert!(is_dict_like(&alias));
    assert_eq!(get_format(&alias), Some(&json!("int64")));
}

#[test]
fn test_proxy_resolves_lazily_and_once() {
    let resolver = RefResolver::new();
    let proxy = JsonRef::new("late.json#/Item", &resolver);
    assert!(!proxy.is_resolved());

    resolver
        .register("late.json", json!({"Item": {"type": "string"}}))
        .unwrap();

    assert!(is_dict_like(&proxy));
    assert!(proxy.is_resolved());
    assert_eq!(proxy.reference(), "late.json#/Item");
}

#[test]
fn test_failed_resolution_is_retried() {
    let resolver = RefResolver::new();
    let proxy = JsonRef::new("late.json#/Items", &resolver);

    assert!(!is_dict_like(&proxy));
    assert!(!is_list_like(&proxy));
    assert!(!proxy.is_resolved());

    resolver
        .register("late.json", json!({"Items": ["a", "b"]}))
        .unwrap();

    assert!(is_list_like(&proxy));
    assert!(!is_dict_like(&proxy));
    assert!(proxy.is_resolved());
    assert_eq!(proxy.subject().unwrap(), &json!(["a", "b"]));
}

#[test]
fn test_unresolvable_proxy_is_neither() {
    let resolver = petstore();
    let proxy = JsonRef::new("#/definitions/Missing", &resolver);

    assert!(!is_dict_like(&proxy));
    assert!(!is_list_like(&proxy));
    assert!(proxy.subject().is_err());
    assert!(!proxy.is_resolved());
}

#[test]
fn test_spec_nodes_are_uniform() {
    let resolver = petstore();
    let nodes = vec![
        SpecNode::from_value(json!({"type": "string"}), &resolver),
        SpecNode::from_value(json!({"$ref": "#/definitions/PetId"}), &resolver),
    ];

    assert!(!nodes[0].is_ref());
    assert!(nodes[1].is_ref());
    assert!(nodes.iter().all(is_dict_like));

    let list_nodes = [
        SpecNode::from_value(json!(["x"]), &resolver),
        SpecNode::from_value(json!({"$ref": "#/definitions/Tags"}), &resolver),
    ];
    assert!(list_nodes.iter().all(is_list_like));
}
