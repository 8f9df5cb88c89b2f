//! Documentation Record Types
//!
//! The shared data model flowing through the pipeline: extraction produces
//! raw per-module docs, the transformer reduces them to `ModuleRecord`s, and
//! the renderer serializes those records as template data.
//!
//! ## Serialization
//!
//! Records serialize with camelCase keys so templates can reference
//! `{{moduleName}}`, `{{signature}}`, `{{type}}` and friends directly.

use serde::{Deserialize, Serialize};

// =============================================================================
// Source-Level Enums
// =============================================================================

/// Kind of top-level declaration a module doc was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// A class (or abstract class) declaration
    Class,
    /// A type alias declaration; carries no members and is never rendered
    TypeAlias,
}

/// Accessibility of a class member as written in source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Default when no modifier is present
    #[default]
    Public,
    Private,
    Protected,
}

impl Visibility {
    /// Map an accessibility keyword to its visibility
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Self::Public),
            "private" => Some(Self::Private),
            "protected" => Some(Self::Protected),
            _ => None,
        }
    }
}

// =============================================================================
// Rendered Records
// =============================================================================

/// A documented method ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDoc {
    /// Declaration text up to (excluding) the body
    pub signature: String,
    /// Single-line description extracted from the doc comment
    pub documentation: String,
}

/// A documented property ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDoc {
    pub name: String,
    /// Declared type annotation, empty when the source omits one
    #[serde(rename = "type")]
    pub property_type: String,
    pub documentation: String,
}

/// A documented event ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDoc {
    pub documentation: String,
}

/// One module's documentation after filtering, keyed to a target directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    pub module_name: String,
    pub methods: Vec<MethodDoc>,
    pub properties: Vec<PropertyDoc>,
    pub events: Vec<EventDoc>,
    /// Directory under the packages root whose README receives this record;
    /// empty when no owning package could be resolved
    pub target_directory: String,
}

impl ModuleRecord {
    pub fn new(module_name: impl Into<String>, target_directory: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            methods: Vec::new(),
            properties: Vec::new(),
            events: Vec::new(),
            target_directory: target_directory.into(),
        }
    }

    pub fn with_methods(mut self, methods: Vec<MethodDoc>) -> Self {
        self.methods = methods;
        self
    }

    pub fn with_properties(mut self, properties: Vec<PropertyDoc>) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_events(mut self, events: Vec<EventDoc>) -> Self {
        self.events = events;
        self
    }

    /// True when filtering removed every member, so rendering would produce
    /// an empty section
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty() && self.properties.is_empty() && self.events.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
