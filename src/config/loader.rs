//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Project config (docstitch.toml)
//! 3. Environment variables (DOCSTITCH_* prefix)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::constants::paths;
use crate::types::{Result, StitchError};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain using Figment:
    /// defaults → project file → env vars
    pub fn load(path: &Path) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if path.exists() {
            debug!("Loading config from: {}", path.display());
            figment = figment.merge(Toml::file(path));
        } else {
            debug!("No config at {}, using defaults", path.display());
        }

        // Merge environment variables (e.g., DOCSTITCH_PACKAGES_ROOT -> packages.root)
        figment = figment.merge(Env::prefixed("DOCSTITCH_").split('_').lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| StitchError::Config(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize project configuration and the default template.
    /// Returns the path of the created config file.
    pub fn init_project(root: &Path, force: bool) -> Result<PathBuf> {
        let config_path = root.join(paths::CONFIG_FILE);
        if config_path.exists() && !force {
            return Err(StitchError::Config(
                "Already initialized. Use --force to overwrite.".to_string(),
            ));
        }

        fs::write(&config_path, Self::default_config_toml())?;
        info!("Created project config: {}", config_path.display());

        let template_path = root.join(paths::TEMPLATE_FILE);
        if let Some(parent) = template_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&template_path, Self::default_template())?;
        info!("Created template: {}", template_path.display());

        Ok(config_path)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Generate default config content (TOML)
    fn default_config_toml() -> String {
        r#"# docstitch configuration
# Values omitted here fall back to built-in defaults.

version = "1.0"

# Source discovery
[source]
include = ["packages/**/src/**/*.ts"]
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/__test__/**",
    "**/*.spec.ts",
    "**/*.test.ts",
    "**/*.d.ts",
]
max_file_size = 1048576

# README targeting
[packages]
root = "packages"
prefix = ""
# Only directories listed here have their READMEs rewritten, e.g.
# include = ["core", "core-adapter"]
include = []

[template]
path = ".docstitch/api-table.hbs"
"#
        .to_string()
    }

    /// Generate the default API table template (Handlebars)
    pub fn default_template() -> String {
        r#"{{#each modules}}
## {{moduleName}}

{{#if methods}}
### Methods

| Name | Description |
| --- | --- |
{{#each methods}}
| `{{{signature}}}` | {{{documentation}}} |
{{/each}}

{{/if}}
{{#if properties}}
### Properties

| Name | Type | Description |
| --- | --- | --- |
{{#each properties}}
| `{{{name}}}` | `{{{type}}}` | {{{documentation}}} |
{{/each}}

{{/if}}
{{#if events}}
### Events

| Description |
| --- |
{{#each events}}
| {{{documentation}}} |
{{/each}}

{{/if}}
{{/each}}"#
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigLoader::load(&temp_dir.path().join(paths::CONFIG_FILE)).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.packages.root, "packages");
    }

    #[test]
    fn test_load_merges_project_file_over_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(paths::CONFIG_FILE);
        fs::write(&path, "[packages]\nroot = \"libs\"\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.packages.root, "libs");
        // Sections absent from the file keep their defaults
        assert_eq!(config.source.include, vec!["packages/**/src/**/*.ts"]);
    }

    #[test]
    fn test_init_project_creates_config_and_template() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = ConfigLoader::init_project(temp_dir.path(), false).unwrap();

        assert!(config_path.exists());
        assert!(temp_dir.path().join(paths::TEMPLATE_FILE).exists());

        // Re-running without --force is refused
        assert!(ConfigLoader::init_project(temp_dir.path(), false).is_err());
        // --force overwrites
        assert!(ConfigLoader::init_project(temp_dir.path(), true).is_ok());
    }

    #[test]
    fn test_default_config_round_trips() {
        let config: Config = toml::from_str(&ConfigLoader::default_config_toml()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.template.path, paths::TEMPLATE_FILE);
    }

    #[test]
    fn test_default_template_compiles() {
        let mut registry = handlebars::Handlebars::new();
        registry
            .register_template_string("api-table", ConfigLoader::default_template())
            .unwrap();
    }
}
