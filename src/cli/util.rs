//! CLI Common Utilities
//!
//! Shared context loading for CLI commands.

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader};
use crate::types::Result;

/// Command execution context
///
/// Bundles the resolved project root with the loaded configuration so
/// command handlers share one resolution path.
pub struct CommandContext {
    /// Project root all relative paths resolve against
    pub root: PathBuf,
    /// Loaded configuration
    pub config: Config,
}

impl CommandContext {
    /// Resolve the project root and load configuration.
    ///
    /// `root` falls back to the current directory. `config_path` resolves
    /// against the root; passing an absolute path uses it as-is.
    pub fn load(root: Option<PathBuf>, config_path: &Path) -> Result<Self> {
        let root = match root {
            Some(root) => root,
            None => std::env::current_dir()?,
        };
        let config = ConfigLoader::load(&root.join(config_path))?;

        Ok(Self { root, config })
    }
}
