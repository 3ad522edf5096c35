use anyhow::Result;
use qualis::prelude::QualifierRegistry;
use std::io::{self, Write};

/// Prints every registered qualifier kind, one per line.
pub fn list_kinds() -> Result<()> {
    let registry = QualifierRegistry::default();
    let mut out = io::stdout().lock();
    for kind in registry.kinds() {
        writeln!(out, "{kind}")?;
    }
    Ok(())
}
