use crate::core::config::AppConfig;
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

const EXAMPLE_CONFIG: &str = include_str!("../../docs/example_config.yaml");

/// Writes the example config to `path`, or to the platform config location
/// when none is given. Returns where the file was written.
pub fn run(path: Option<&str>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => PathBuf::from(path),
        None => AppConfig::default_config_path()?,
    };
    write_example_config(&path)?;
    println!("Created configuration at {}", path.display());
    Ok(path)
}

fn write_example_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
