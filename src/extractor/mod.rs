//! Source Extraction
//!
//! Turns TypeScript sources into raw module documentation:
//!
//! 1. `FileScanner` selects files via the configured include/exclude globs
//! 2. `TypeScriptExtractor` parses each file and collects classes,
//!    members and type aliases together with their JSDoc comments
//!
//! The output is raw and unfiltered; visibility and documented-ness rules
//! are applied later by the transform stage.

mod jsdoc;
mod scanner;
mod typescript;

pub use jsdoc::{JsDoc, JsDocTag};
pub use scanner::{FileScanner, ScannedFile};
pub use typescript::TypeScriptExtractor;

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::config::SourceConfig;
use crate::types::{ModuleKind, Result, Visibility};

// =============================================================================
// Raw Documentation Model
// =============================================================================

/// One top-level declaration's documentation, unfiltered
#[derive(Debug, Clone)]
pub struct RawModuleDoc {
    pub name: String,
    pub kind: ModuleKind,
    /// Root-relative source path with forward slashes
    pub path: String,
    /// Class-level description, present only when actually documented
    pub documentation: Option<String>,
    pub methods: Vec<RawMethod>,
    pub properties: Vec<RawProperty>,
    pub events: Vec<RawEvent>,
}

#[derive(Debug, Clone)]
pub struct RawMethod {
    pub signature: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub documentation: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RawProperty {
    pub name: String,
    pub prop_type: Option<String>,
    pub visibility: Visibility,
    pub is_static: bool,
    pub documentation: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RawEvent {
    pub documentation: String,
}

// =============================================================================
// Extractor Facade
// =============================================================================

/// Scans the tree and extracts raw docs from every matching file
pub struct Extractor {
    scanner: FileScanner,
    engine: TypeScriptExtractor,
}

impl Extractor {
    pub fn new<P: AsRef<Path>>(root: P, config: &SourceConfig) -> Result<Self> {
        Ok(Self {
            scanner: FileScanner::from_config(root, config),
            engine: TypeScriptExtractor::new()?,
        })
    }

    /// Extract docs from all configured sources, keyed by module name.
    /// Any unreadable or unparseable file aborts the whole run.
    pub async fn extract(&self) -> Result<BTreeMap<String, RawModuleDoc>> {
        let files = self.scanner.scan()?;
        info!("Extracting docs from {} file(s)", files.len());

        let mut modules = BTreeMap::new();

        for file in files {
            let content = tokio::fs::read_to_string(&file.path).await?;

            for module in self.engine.extract_file(&file.relative, &content)? {
                debug!("Extracted {} from {}", module.name, module.path);
                if let Some(previous) = modules.insert(module.name.clone(), module) {
                    debug!(
                        "Duplicate module name {} (earlier: {}); keeping the later file",
                        previous.name, previous.path
                    );
                }
            }
        }

        Ok(modules)
    }
}
