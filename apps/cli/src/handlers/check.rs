use crate::models::report::Verdict;
use anyhow::{Context, Result};
use qualis::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// Evaluates the qualifiers from `config` plus command-line ones against an inventory file
/// and prints one verdict per package as JSON.
pub fn check_inventory(
    config: &QualisConfig,
    packages: &Path,
    extra: &[QualifierRecord],
) -> Result<()> {
    let registry = QualifierRegistry::default();
    let set = QualifierSet::from_records(config.qualifiers.iter().chain(extra), &registry)
        .context("Qualifier records could not be decoded")?;

    let inventory = load_inventory(packages)?;
    info!(packages = inventory.len(), qualifiers = set.len(), "evaluating inventory");

    let mut verdicts = Vec::with_capacity(inventory.len());
    for package in &inventory {
        if !package.is_consistent() {
            debug!(id = %package.id, metadata_type = %package.metadata_type, "inconsistent metadata");
        }
        let satisfied = set
            .satisfied_by(package)
            .with_context(|| format!("Evaluating package {}", package.id))?;
        verdicts.push(Verdict::new(package, satisfied));
    }

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &verdicts).context("Writing verdicts")?;
    writeln!(out)?;
    Ok(())
}

fn load_inventory(path: &Path) -> Result<Vec<Package>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Reading inventory {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Parsing inventory {}", path.display()))
}
