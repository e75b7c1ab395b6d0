//! Init-config command implementation.

use std::path::Path;

use anyhow::{Context, Result, bail};
use fcp_core::Config;

/// Run the init-config command
pub fn run(output: &str, force: bool) -> Result<()> {
    let path = Path::new(output);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", output);
    }

    Config::default()
        .save(path)
        .with_context(|| format!("Failed to write config to {}", output))?;

    println!("Wrote default config to {}", output);
    Ok(())
}
