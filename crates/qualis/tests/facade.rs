use qualis::kinds;
use qualis::prelude::*;

#[test]
fn every_shorthand_kind_is_registered_by_default() {
    let registry = QualifierRegistry::default();
    for kind in registry.kinds() {
        assert!(kinds::shorthand_param(kind).is_some(), "{kind} has no shorthand");
    }
    assert!(kinds::shorthand_param("platform-cpe").is_none());
}

#[test]
fn shorthand_expands_to_a_buildable_record() {
    let record = kinds::parse_shorthand("rpm-modularity=nodejs:16").unwrap();
    assert_eq!(record, QualifierRecord::new("rpm-modularity").param("module", "nodejs:16"));

    let qualifier = QualifierRegistry::default().build(&record).unwrap();
    assert_eq!(qualifier.to_string(), r#"rpm-modularity(module="nodejs:16")"#);
}

#[test]
fn shorthand_keeps_empty_and_embedded_equals_values() {
    let empty = kinds::parse_shorthand("rpm-modularity=").unwrap();
    assert_eq!(empty.params["module"], "");

    let odd = kinds::parse_shorthand("rpm-modularity=a=b").unwrap();
    assert_eq!(odd.params["module"], "a=b");
}

#[test]
fn shorthand_rejects_unknown_kinds_and_missing_separator() {
    assert!(kinds::parse_shorthand("platform-cpe=cpe:2.3:o:redhat:rhel:8").is_none());
    assert!(kinds::parse_shorthand("rpm-modularity").is_none());
}
