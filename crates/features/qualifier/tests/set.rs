mod fixtures;

use fixtures::{apk, rpm};
use qualis_domain::config::QualifierRecord;
use qualis_domain::pkg::Package;
use qualis_qualifier::{Qualifier, QualifierError, QualifierRegistry, QualifierSet, RpmModularity};
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
struct Faulty;

impl fmt::Display for Faulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("faulty()")
    }
}

impl Qualifier for Faulty {
    fn kind(&self) -> &'static str {
        "faulty"
    }

    fn satisfied(&self, _package: &Package) -> Result<bool, QualifierError> {
        Err("metadata could not be read".into())
    }
}

fn modularity(module: &str) -> QualifierRecord {
    QualifierRecord::new("rpm-modularity").param("module", module)
}

#[test]
fn empty_set_is_always_satisfied() {
    let set = QualifierSet::new();
    assert!(set.is_empty());
    assert!(set.satisfied_by(&apk("musl")).unwrap());
}

#[test]
fn every_member_must_be_satisfied() {
    let set = QualifierSet::new()
        .with(RpmModularity::new("nodejs:16"))
        .with(RpmModularity::new("nodejs:16"));
    assert_eq!(set.len(), 2);
    assert!(set.satisfied_by(&rpm("nodejs", "nodejs:16")).unwrap());

    let conflicting = QualifierSet::new()
        .with(RpmModularity::new("nodejs:16"))
        .with(RpmModularity::new("nodejs:18"));
    assert!(!conflicting.satisfied_by(&rpm("nodejs", "nodejs:16")).unwrap());
}

#[test]
fn evaluation_stops_at_first_unsatisfied_member() {
    let set = QualifierSet::new().with(RpmModularity::new("nodejs:16")).with(Faulty);
    assert!(!set.satisfied_by(&rpm("nodejs", "nodejs:18")).unwrap());
}

#[test]
fn faults_name_the_qualifier_and_package() {
    let set = QualifierSet::new().with(Faulty);
    let err = set.satisfied_by(&rpm("nodejs", "nodejs:16")).unwrap_err();

    match &err {
        QualifierError::Evaluation { qualifier, package, message, .. } => {
            assert_eq!(qualifier, "faulty()");
            assert_eq!(package, "nodejs@1.0.0-1.el8");
            assert!(message.contains("metadata could not be read"));
        },
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("Failed to check qualifier faulty() for package nodejs@"));
}

#[test]
fn from_records_skips_unknown_kinds() {
    let records = vec![
        modularity("nodejs:16"),
        QualifierRecord::new("platform-cpe").param("cpe", "cpe:2.3:o:redhat:enterprise_linux:8"),
    ];

    let set = QualifierSet::from_records(&records, &QualifierRegistry::default()).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.iter().next().map(|q| q.kind()), Some("rpm-modularity"));
}

#[test]
fn unknown_kinds_with_structured_params_are_skipped() {
    let records: Vec<QualifierRecord> = serde_json::from_str(
        r#"[
            { "kind": "rpm-modularity", "module": "nodejs:16" },
            { "kind": "platform-cpe", "cpes": ["cpe:2.3:o:redhat:rhel:8"], "strict": true }
        ]"#,
    )
    .unwrap();

    let set = QualifierSet::from_records(&records, &QualifierRegistry::default()).unwrap();
    assert_eq!(set.len(), 1);
    assert!(set.satisfied_by(&rpm("nodejs", "nodejs:16")).unwrap());
}

#[test]
fn from_records_rejects_malformed_known_kinds() {
    let registry = QualifierRegistry::default();
    for record in [
        QualifierRecord::new("rpm-modularity"),
        QualifierRecord::new("rpm-modularity").param("module", serde_json::json!(["nodejs:16"])),
    ] {
        let err = QualifierSet::from_records([&record], &registry).unwrap_err();
        assert!(matches!(err, QualifierError::InvalidRecord { .. }), "{record}");
    }
}

#[test]
fn records_parsed_from_json_drive_filtering() {
    let records: Vec<QualifierRecord> =
        serde_json::from_str(r#"[{ "kind": "rpm-modularity", "module": "perl:5.26" }]"#).unwrap();
    let set = QualifierSet::from_records(&records, &QualifierRegistry::default()).unwrap();

    let inventory = vec![rpm("perl", "perl:5.26"), rpm("perl", "perl:5.30"), apk("perl"), rpm("bash", "")];
    let kept = set.retain_qualified(&inventory).unwrap();

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "rpm-perl");
    assert_eq!(kept[0].metadata, inventory[0].metadata);
}

#[test]
fn shared_across_threads_without_locking() {
    let set = Arc::new(QualifierSet::new().with(RpmModularity::new("nodejs:16")));
    let packages: Vec<Package> =
        (0..32).map(|i| rpm("nodejs", if i % 2 == 0 { "nodejs:16" } else { "nodejs:18" })).collect();

    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let set = Arc::clone(&set);
                let packages = &packages;
                scope.spawn(move || set.retain_qualified(packages).unwrap().len())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(counts, vec![16; 4]);
}

#[test]
fn collects_from_boxed_qualifiers() {
    let set: QualifierSet = ["nodejs:16", "nodejs:18"]
        .into_iter()
        .map(|label| Box::new(RpmModularity::new(label)) as Box<dyn Qualifier>)
        .collect();

    let labels: Vec<String> = (&set).into_iter().map(ToString::to_string).collect();
    assert_eq!(labels, vec![r#"rpm-modularity(module="nodejs:16")"#, r#"rpm-modularity(module="nodejs:18")"#]);
}
