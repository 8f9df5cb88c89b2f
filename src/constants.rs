//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers and fixed marker strings are defined here.

/// Sentinel comments bounding the generated region of a README
pub mod sentinel {
    /// Opening marker; everything from this line to the closing marker is
    /// replaced on every run
    pub const START: &str = "<!-- docgen-tsdoc-replacer:start __DO NOT EDIT, This section is automatically generated__ -->";

    /// Closing marker
    pub const END: &str = "<!-- docgen-tsdoc-replacer:end -->";
}

/// Source scanning constants
pub mod scan {
    /// Maximum source file size considered for extraction (1MB)
    pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;
}

/// Well-known file locations, relative to the project root
pub mod paths {
    /// Configuration file name
    pub const CONFIG_FILE: &str = "docstitch.toml";

    /// Default README table template location
    pub const TEMPLATE_FILE: &str = ".docstitch/api-table.hbs";

    /// README file name probed during target directory resolution
    pub const README_FILE: &str = "README.md";
}

/// Template registry constants
pub mod template {
    /// Name the README table template is registered under
    pub const TEMPLATE_NAME: &str = "api-table";
}
