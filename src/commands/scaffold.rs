// src/commands/scaffold.rs

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

use crate::core::scaffold;

/// Builds the testing scaffolding for a framework name/version pair from a
/// schema notebook, rooted at `root`.
pub fn execute(name: &str, version: &str, input: &Path, root: &Path) -> Result<()> {
    println!(
        "Creating scaffolding for {} {} from {}",
        name.yellow(),
        version.yellow(),
        input.display()
    );

    scaffold::create(name, version, input, root)
        .with_context(|| format!("failed to create scaffolding for {name} {version}"))?;

    let run_root = root.join(name).join(version);
    println!(
        "{}",
        format!("Scaffolding created at {}", run_root.display()).green()
    );
    Ok(())
}
