//! Config Command
//!
//! Inspect docstitch configuration.
//!
//! Usage:
//!   docstitch config show [-f json]
//!   docstitch config path

use std::path::Path;

use crate::config::ConfigLoader;
use crate::types::Result;

/// Print the merged effective configuration
pub fn show(config_path: &Path, format: &str) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", toml::to_string_pretty(&config)?);
    }

    Ok(())
}

/// Print configuration file locations
pub fn path(config_path: &Path) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;

    println!("Configuration paths:");
    println!();

    let exists = if config_path.exists() { "✓" } else { "✗" };
    println!("  Config:   {} {}", exists, config_path.display());

    let template_path = Path::new(&config.template.path);
    let exists = if template_path.exists() { "✓" } else { "✗" };
    println!("  Template: {} {}", exists, template_path.display());

    Ok(())
}
