//! Property Filtering Tests
//!
//! Ignore markers, host skips, and per-pass ignore sets.

use crate::*;
use serde_json::json;

#[test]
fn test_ignore_set_removes_named_property() {
    init_tracing();
    let resolver = ContractResolver::builder().ignore_property("Age").build();
    let text = vmwire::to_string_with(&Person::alice(), &resolver).unwrap();
    assert_eq!(text, r#"{"Name":"Alice","Save":null}"#);
}

#[test]
fn test_ignore_marker_removes_property() {
    let value = vmwire::to_value(&Login::sample()).unwrap();
    assert_eq!(value, json!({"User": "alice", "Submit": null}));
}

#[test]
fn test_host_skip_not_undone_by_empty_set() {
    let value = vmwire::to_value(&Page::sample()).unwrap();
    assert!(value.get("Refresh").is_none());
}

#[test]
fn test_unknown_names_in_set_are_harmless() {
    let resolver = ContractResolver::builder()
        .ignore_properties(["Nope", "Missing"])
        .build();
    let text = vmwire::to_string_with(&Person::alice(), &resolver).unwrap();
    assert_eq!(text, r#"{"Name":"Alice","Save":null,"Age":30}"#);
}

#[test]
fn test_ignore_set_applies_to_nested_view_models() {
    let resolver = vmwire::resolver_ignoring(["Zip"].into_iter().collect());
    let value = vmwire::to_value_with(&Page::sample(), &resolver).unwrap();
    assert_eq!(value["Address"], json!({"City": "Oslo"}));
}

#[test]
fn test_names_match_case_sensitively() {
    let resolver = ContractResolver::builder().ignore_property("age").build();
    let value = vmwire::to_value_with(&Person::alice(), &resolver).unwrap();
    assert_eq!(value["Age"], json!(30));
}

#[test]
fn test_options_from_json() {
    let options = ResolverOptions::from_json(r#"{"ignoredPropertyNames":["Name","Save"]}"#).unwrap();
    let resolver = ContractResolver::from_options(&options);
    let text = vmwire::to_string_with(&Person::alice(), &resolver).unwrap();
    assert_eq!(text, r#"{"Age":30}"#);
}

#[test]
fn test_set_replaced_between_passes() {
    let mut resolver = ContractResolver::new();
    let person = Person::alice();

    let full = vmwire::to_value_with(&person, &resolver).unwrap();
    resolver.set_ignored_property_names(["Name"].into_iter().collect());
    let narrowed = vmwire::to_value_with(&person, &resolver).unwrap();

    assert_eq!(full.as_object().unwrap().len(), 3);
    assert_eq!(narrowed, json!({"Save": null, "Age": 30}));
}
