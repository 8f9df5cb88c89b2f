//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Project config (docstitch.toml)
//! 3. Environment variables (DOCSTITCH_*)

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::*;
