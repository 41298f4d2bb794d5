//! Populate Tests
//!
//! Incoming JSON applied to existing view models.

use crate::*;

#[test]
fn test_populate_plain_property() {
    init_tracing();
    let mut person = Person::alice();
    vmwire::populate(&mut person, r#"{"Name":"Bob"}"#).unwrap();
    assert_eq!(person.name, "Bob");
}

#[test]
fn test_populate_command_unsupported() {
    let mut person = Person::alice();
    let err = vmwire::populate(&mut person, r#"{"Save":1}"#).unwrap_err();
    assert!(err.is_unsupported());
}

#[test]
fn test_populate_reactive_unsupported() {
    let mut person = Person::alice();
    let err = vmwire::populate(&mut person, r#"{"Age":42}"#).unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(person.age.get(), 30);
}

#[test]
fn test_refused_key_blocks_earlier_keys() {
    for json in [r#"{"Name":"Bob","Save":1}"#, r#"{"Save":1,"Name":"Bob"}"#] {
        let mut person = Person::alice();
        let err = vmwire::populate(&mut person, json).unwrap_err();
        assert!(err.is_unsupported());
        assert_eq!(person.name, "Alice", "name changed for {}", json);
    }
}

#[test]
fn test_populate_void_action_unsupported() {
    let mut login = Login::sample();
    let err = vmwire::populate(&mut login, r#"{"Submit":null}"#).unwrap_err();
    assert!(err.is_unsupported());
}

#[test]
fn test_populate_skips_ignore_marked_property() {
    let mut login = Login::sample();
    vmwire::populate(&mut login, r#"{"User":"bob","Password":"x"}"#).unwrap();
    assert_eq!(login.user, "bob");
    assert_eq!(login.password, "hunter2");
}

#[test]
fn test_populate_respects_ignore_set() {
    let resolver = ContractResolver::builder().ignore_property("Age").build();
    let mut person = Person::alice();
    vmwire::Populator::new(&resolver)
        .populate(&mut person, r#"{"Age":42,"Name":"Eve"}"#)
        .unwrap();
    assert_eq!(person.name, "Eve");
    assert_eq!(person.age.get(), 30);
}

#[test]
fn test_populate_rejects_non_object() {
    let mut person = Person::alice();
    let err = vmwire::populate(&mut person, "[1,2]").unwrap_err();
    assert!(matches!(err, Error::ExpectedObject { found: "array" }));
}

#[test]
fn test_populate_malformed_json() {
    let mut person = Person::alice();
    let err = vmwire::populate(&mut person, "{").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}
