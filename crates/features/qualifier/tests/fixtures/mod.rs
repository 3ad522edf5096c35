#![allow(dead_code)]

use qualis_domain::pkg::{
    ApkMetadata, DpkgMetadata, GolangBinMetadata, JavaMetadata, Metadata, Package, PackageType,
    RpmMetadata,
};

pub fn rpm(name: &str, modularity: &str) -> Package {
    Package::new(
        format!("rpm-{name}"),
        name,
        "1.0.0-1.el8",
        PackageType::Rpm,
        Some(Metadata::Rpm(RpmMetadata { epoch: None, modularity: modularity.to_owned() })),
    )
}

pub fn apk(name: &str) -> Package {
    Package::new(
        format!("apk-{name}"),
        name,
        "1.0.0-r0",
        PackageType::Apk,
        Some(Metadata::Apk(ApkMetadata { origin_package: name.to_owned() })),
    )
}

/// One package per non-RPM metadata kind, plus one without metadata.
pub fn non_rpm() -> Vec<Package> {
    vec![
        apk("musl"),
        Package::new(
            "deb-bash",
            "bash",
            "5.2.15-2",
            PackageType::Deb,
            Some(Metadata::Dpkg(DpkgMetadata::default())),
        ),
        Package::new(
            "jar-log4j",
            "log4j-core",
            "2.17.1",
            PackageType::JavaArchive,
            Some(Metadata::Java(JavaMetadata::default())),
        ),
        Package::new(
            "go-cobra",
            "github.com/spf13/cobra",
            "v1.8.0",
            PackageType::GoModule,
            Some(Metadata::GolangBin(GolangBinMetadata::default())),
        ),
        Package::new("bare", "busybox", "1.36.1", PackageType::Unknown, None),
    ]
}
