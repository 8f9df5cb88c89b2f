use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::config::SourceConfig;
use crate::constants::scan;
use crate::types::Result;

/// Walks the project tree and selects the source files to document.
///
/// Matching happens against root-relative paths with forward slashes, so
/// configured globs behave identically across platforms.
pub struct FileScanner {
    root: PathBuf,
    include: Vec<String>,
    exclude: Vec<String>,
    max_file_size: u64,
}

impl FileScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            include: vec!["**/*".to_string()],
            exclude: vec![],
            max_file_size: scan::DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Create a scanner from the source section of the project config
    pub fn from_config<P: AsRef<Path>>(root: P, config: &SourceConfig) -> Self {
        Self::new(root)
            .with_include(config.include.clone())
            .with_exclude(config.exclude.clone())
            .with_max_file_size(config.max_file_size)
    }

    pub fn with_include(mut self, patterns: Vec<String>) -> Self {
        self.include = patterns;
        self
    }

    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    pub fn scan(&self) -> Result<Vec<ScannedFile>> {
        // Compile patterns up front so a bad glob fails the whole run
        let include = Self::compile(&self.include)?;
        let exclude = Self::compile(&self.exclude)?;

        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false) // Security: prevent symlink traversal attacks
            .build();

        let mut files = Vec::new();

        for entry in walker.filter_map(|e| e.ok()) {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let Ok(relative) = path.strip_prefix(&self.root) else {
                continue;
            };
            let relative = relative.to_string_lossy().replace('\\', "/");

            if !include.iter().any(|p| p.matches(&relative)) {
                continue;
            }

            if exclude.iter().any(|p| p.matches(&relative)) {
                continue;
            }

            if let Ok(metadata) = path.metadata() {
                if metadata.len() > self.max_file_size {
                    continue;
                }

                files.push(ScannedFile {
                    path: path.to_path_buf(),
                    relative,
                });
            }
        }

        // Walk order is filesystem-dependent; sort for deterministic output
        files.sort_by(|a, b| a.relative.cmp(&b.relative));

        Ok(files)
    }

    fn compile(patterns: &[String]) -> Result<Vec<glob::Pattern>> {
        patterns
            .iter()
            .map(|p| glob::Pattern::new(p).map_err(Into::into))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct ScannedFile {
    /// Absolute path on disk
    pub path: PathBuf,
    /// Root-relative path with forward slashes
    pub relative: String,
}
