//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Every field is optional in `docstitch.toml`; anything omitted falls back
//! to the defaults below.

use serde::{Deserialize, Serialize};

use crate::constants::{paths, scan};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Source discovery settings
    pub source: SourceConfig,

    /// Packages root and README targeting settings
    pub packages: PackagesConfig,

    /// Template settings
    pub template: TemplateConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            source: SourceConfig::default(),
            packages: PackagesConfig::default(),
            template: TemplateConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    /// Returns `StitchError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if self.source.include.is_empty() {
            return Err(crate::types::StitchError::Config(
                "source.include must contain at least one pattern".to_string(),
            ));
        }

        if self.source.max_file_size == 0 {
            return Err(crate::types::StitchError::Config(
                "source.max_file_size must be greater than 0".to_string(),
            ));
        }

        if self.packages.root.is_empty() {
            return Err(crate::types::StitchError::Config(
                "packages.root must not be empty".to_string(),
            ));
        }

        if self.template.path.is_empty() {
            return Err(crate::types::StitchError::Config(
                "template.path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Source Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Glob patterns to include
    pub include: Vec<String>,

    /// Glob patterns to exclude
    pub exclude: Vec<String>,

    /// Maximum file size in bytes
    pub max_file_size: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            include: vec!["packages/**/src/**/*.ts".to_string()],
            exclude: vec![
                "**/node_modules/**".to_string(),
                "**/dist/**".to_string(),
                "**/__test__/**".to_string(),
                "**/*.spec.ts".to_string(),
                "**/*.test.ts".to_string(),
                "**/*.d.ts".to_string(),
            ],
            max_file_size: scan::DEFAULT_MAX_FILE_SIZE,
        }
    }
}

// =============================================================================
// Packages Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagesConfig {
    /// Directory containing the publishable packages
    pub root: String,

    /// Directory-name prefix used to anchor target resolution;
    /// empty means "start just below the packages root"
    pub prefix: String,

    /// Allow-list of directories whose READMEs may be rewritten.
    /// Directories not listed here are extracted but never written.
    pub include: Vec<String>,
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            root: "packages".to_string(),
            prefix: String::new(),
            include: Vec::new(),
        }
    }
}

// =============================================================================
// Template Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Handlebars template path, relative to the project root
    pub path: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            path: paths::TEMPLATE_FILE.to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
