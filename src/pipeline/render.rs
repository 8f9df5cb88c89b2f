//! Fragment Rendering
//!
//! Renders one directory's records through the registered Handlebars
//! template. Records follow a fixed ordering before rendering:
//!
//! 1. modules whose name carries neither rank keyword, in insertion order
//! 2. "adapter" modules, alphabetical
//! 3. "foundation" modules, alphabetical ("foundation" outranks "adapter"
//!    when a name carries both)

use std::cmp::Ordering;
use std::path::Path;

use handlebars::Handlebars;
use serde_json::json;

use crate::constants::template::TEMPLATE_NAME;
use crate::types::{ModuleRecord, Result};

pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    /// Compile the template from disk; syntax errors fail the run
    pub fn from_template_file(path: &Path) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_template_file(TEMPLATE_NAME, path)?;
        Ok(Self { registry })
    }

    pub fn from_template_str(template: &str) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_template_string(TEMPLATE_NAME, template)?;
        Ok(Self { registry })
    }

    /// Render one directory's fragment.
    /// Returns `None` when every record is empty, so callers never splice
    /// an empty table into a README.
    pub fn render(&self, records: &[ModuleRecord]) -> Result<Option<String>> {
        let mut modules: Vec<&ModuleRecord> = records.iter().filter(|r| !r.is_empty()).collect();
        if modules.is_empty() {
            return Ok(None);
        }

        sort_modules(&mut modules);

        let rendered = self
            .registry
            .render(TEMPLATE_NAME, &json!({ "modules": modules }))?;

        Ok(Some(rendered.trim_end().to_string()))
    }
}

/// Rank a module name: no keyword, then adapter, then foundation
fn tier(name: &str) -> u8 {
    let lower = name.to_lowercase();
    if lower.contains("foundation") {
        2
    } else if lower.contains("adapter") {
        1
    } else {
        0
    }
}

fn sort_modules(modules: &mut [&ModuleRecord]) {
    // Stable sort: tier-0 entries keep their insertion order
    modules.sort_by(|a, b| {
        let (ta, tb) = (tier(&a.module_name), tier(&b.module_name));
        match ta.cmp(&tb) {
            Ordering::Equal if ta == 0 => Ordering::Equal,
            Ordering::Equal => a
                .module_name
                .to_lowercase()
                .cmp(&b.module_name.to_lowercase()),
            other => other,
        }
    });
}
