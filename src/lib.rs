//! docstitch - API Reference Tables for Monorepo READMEs
//!
//! A build-time documentation tool for TypeScript monorepos: it extracts
//! documented classes from source files, renders them as markdown tables
//! through a Handlebars template, and splices the result into each package's
//! README between a pair of sentinel comments.
//!
//! ## Pipeline
//!
//! 1. [`extractor`]: scan sources and pull docs out of the syntax tree
//! 2. [`pipeline`]: filter members, group by package, render, splice
//!
//! ## Quick Start
//!
//! ```ignore
//! use docstitch::{Config, pipeline};
//!
//! let config = Config::default();
//! let summary = pipeline::run(&project_root, &config).await?;
//! println!("{} README(s) updated", summary.updated);
//! ```
//!
//! ## Modules
//!
//! - [`extractor`]: tree-sitter based TypeScript doc extraction
//! - [`pipeline`]: transform, grouping, rendering and README splicing
//! - [`config`]: layered configuration (defaults, TOML, environment)
//! - [`cli`]: command implementations behind the `docstitch` binary

pub mod cli;
pub mod config;
pub mod constants;
pub mod extractor;
pub mod pipeline;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, PackagesConfig, SourceConfig, TemplateConfig};

// Error Types
pub use types::error::{Result, StitchError};

// Data Model
pub use types::record::{EventDoc, MethodDoc, ModuleKind, ModuleRecord, PropertyDoc, Visibility};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use pipeline::{
    CheckReport, DirectoryGroups, ReadmeStatus, ReadmeWriter, Renderer, RunSummary, WriteOutcome,
};

// =============================================================================
// Extractor Re-exports
// =============================================================================

pub use extractor::{Extractor, FileScanner, JsDoc, TypeScriptExtractor};
