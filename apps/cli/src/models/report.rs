use qualis::prelude::Package;
use serde::Serialize;

/// One line of `qualis check` output.
#[derive(Debug, Serialize)]
pub struct Verdict<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub satisfied: bool,
}

impl<'a> Verdict<'a> {
    pub fn new(package: &'a Package, satisfied: bool) -> Self {
        Self { id: &package.id, name: &package.name, satisfied }
    }
}
