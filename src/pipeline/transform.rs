//! Raw-to-Record Transformation
//!
//! Applies the publication rules to raw extracted docs:
//!
//! - type aliases are dropped entirely
//! - methods and properties survive only when documented, non-protected
//!   and non-static (documented private members are kept)
//! - events always survive
//! - doc text is flattened to a single line for table cells
//!
//! Each surviving module is tagged with the package directory whose README
//! receives it, resolved by walking the source path upward until a README
//! is found.

use std::path::Path;

use tracing::warn;

use crate::constants::paths;
use crate::extractor::RawModuleDoc;
use crate::types::{EventDoc, MethodDoc, ModuleKind, ModuleRecord, PropertyDoc, Visibility};

/// Reduce one raw module doc to its renderable record.
/// Returns `None` for type aliases.
pub fn transform(raw: &RawModuleDoc, packages_root: &Path, prefix: &str) -> Option<ModuleRecord> {
    if raw.kind == ModuleKind::TypeAlias {
        return None;
    }

    let methods = raw
        .methods
        .iter()
        .filter(|m| keep_member(m.visibility, m.is_static, m.documentation.as_deref()))
        .map(|m| MethodDoc {
            signature: m.signature.clone(),
            documentation: collapse_newlines(m.documentation.as_deref().unwrap_or_default()),
        })
        .collect();

    let properties = raw
        .properties
        .iter()
        .filter(|p| keep_member(p.visibility, p.is_static, p.documentation.as_deref()))
        .map(|p| PropertyDoc {
            name: p.name.clone(),
            property_type: p.prop_type.clone().unwrap_or_default(),
            documentation: collapse_newlines(p.documentation.as_deref().unwrap_or_default()),
        })
        .collect();

    let events = raw
        .events
        .iter()
        .map(|e| EventDoc {
            documentation: collapse_newlines(&e.documentation),
        })
        .collect();

    let target_directory = resolve_target_directory(&raw.path, prefix, packages_root);
    if target_directory.is_empty() {
        warn!(
            "No owning package README found for {} ({})",
            raw.name, raw.path
        );
    }

    Some(ModuleRecord {
        module_name: raw.name.clone(),
        methods,
        properties,
        events,
        target_directory,
    })
}

/// Publication rule for methods and properties. Protected and static
/// members never ship; everything else needs a non-empty description.
pub fn keep_member(visibility: Visibility, is_static: bool, documentation: Option<&str>) -> bool {
    if is_static || visibility == Visibility::Protected {
        return false;
    }
    documentation.is_some_and(|d| !d.trim().is_empty())
}

/// Flatten multi-line doc text into a single table-cell-safe line
pub fn collapse_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace('\n', " ")
}

/// Resolve which package directory owns a source file.
///
/// Starting at the first path segment matching `prefix` (or the segment
/// just below the packages root when the prefix is empty), candidate
/// directories are probed deepest-first for a README until one exists.
/// Returns the empty string when nothing matches.
pub fn resolve_target_directory(source_path: &str, prefix: &str, packages_root: &Path) -> String {
    let mut segments: Vec<&str> = source_path.split('/').collect();
    // The last segment is the filename
    segments.pop();

    let start = if prefix.is_empty() {
        let root_name = packages_root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        segments.iter().position(|s| *s == root_name).map(|i| i + 1)
    } else {
        segments.iter().position(|s| s.starts_with(prefix))
    };

    let Some(start) = start else {
        return String::new();
    };

    let mut candidate: Vec<&str> = segments[start..].to_vec();

    while !candidate.is_empty() {
        let dir = candidate.join("/");
        if packages_root.join(&dir).join(paths::README_FILE).is_file() {
            return dir;
        }
        candidate.pop();
    }

    String::new()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{RawEvent, RawMethod, RawProperty};
    use proptest::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    fn method(doc: Option<&str>, visibility: Visibility, is_static: bool) -> RawMethod {
        RawMethod {
            signature: "run(): void".to_string(),
            visibility,
            is_static,
            documentation: doc.map(String::from),
        }
    }

    #[test]
    fn test_keep_member_rules() {
        // Documented public members ship
        assert!(keep_member(Visibility::Public, false, Some("Runs.")));
        // Documented private members ship too
        assert!(keep_member(Visibility::Private, false, Some("Runs.")));
        // Protected never ships
        assert!(!keep_member(Visibility::Protected, false, Some("Runs.")));
        // Static never ships
        assert!(!keep_member(Visibility::Public, true, Some("Runs.")));
        // Undocumented never ships
        assert!(!keep_member(Visibility::Public, false, None));
        assert!(!keep_member(Visibility::Public, false, Some("   ")));
    }

    #[test]
    fn test_collapse_newlines() {
        assert_eq!(collapse_newlines("one\ntwo\nthree"), "one two three");
        assert_eq!(collapse_newlines("crlf\r\nline"), "crlf line");
        assert_eq!(collapse_newlines("already flat"), "already flat");
    }

    #[test]
    fn test_transform_drops_type_alias() {
        let raw = RawModuleDoc {
            name: "Payload".to_string(),
            kind: ModuleKind::TypeAlias,
            path: "packages/net/src/types.ts".to_string(),
            documentation: Some("Alias.".to_string()),
            methods: Vec::new(),
            properties: Vec::new(),
            events: Vec::new(),
        };

        assert!(transform(&raw, Path::new("/nowhere/packages"), "").is_none());
    }

    #[test]
    fn test_transform_filters_members_and_keeps_events() {
        let temp_dir = TempDir::new().unwrap();
        let packages_root = temp_dir.path().join("packages");
        fs::create_dir_all(packages_root.join("net")).unwrap();
        fs::write(packages_root.join("net/README.md"), "# net\n").unwrap();

        let raw = RawModuleDoc {
            name: "Transport".to_string(),
            kind: ModuleKind::Class,
            path: "packages/net/src/transport.ts".to_string(),
            documentation: Some("Transport.".to_string()),
            methods: vec![
                method(Some("Sends a\nmessage."), Visibility::Public, false),
                method(Some("Hidden."), Visibility::Protected, false),
                method(None, Visibility::Public, false),
            ],
            properties: vec![RawProperty {
                name: "endpoint".to_string(),
                prop_type: Some("string".to_string()),
                visibility: Visibility::Private,
                is_static: false,
                documentation: Some("Where to connect.".to_string()),
            }],
            events: vec![RawEvent {
                documentation: "closed when the\npeer hangs up".to_string(),
            }],
        };

        let record = transform(&raw, &packages_root, "").unwrap();

        assert_eq!(record.module_name, "Transport");
        assert_eq!(record.target_directory, "net");
        assert_eq!(record.methods.len(), 1);
        assert_eq!(record.methods[0].documentation, "Sends a message.");
        assert_eq!(record.properties.len(), 1);
        assert_eq!(record.properties[0].property_type, "string");
        assert_eq!(record.events.len(), 1);
        assert_eq!(record.events[0].documentation, "closed when the peer hangs up");
    }

    #[test]
    fn test_resolve_walks_up_to_nearest_readme() {
        let temp_dir = TempDir::new().unwrap();
        let packages_root = temp_dir.path().join("packages");
        fs::create_dir_all(packages_root.join("core/src/util")).unwrap();
        fs::write(packages_root.join("core/README.md"), "# core\n").unwrap();

        let dir = resolve_target_directory(
            "packages/core/src/util/helper.ts",
            "",
            &packages_root,
        );
        assert_eq!(dir, "core");
    }

    #[test]
    fn test_resolve_prefers_deepest_readme() {
        let temp_dir = TempDir::new().unwrap();
        let packages_root = temp_dir.path().join("packages");
        fs::create_dir_all(packages_root.join("core/plugins")).unwrap();
        fs::write(packages_root.join("core/README.md"), "# core\n").unwrap();
        fs::write(packages_root.join("core/plugins/README.md"), "# plugins\n").unwrap();

        let dir = resolve_target_directory(
            "packages/core/plugins/loader.ts",
            "",
            &packages_root,
        );
        assert_eq!(dir, "core/plugins");
    }

    #[test]
    fn test_resolve_uses_prefix_anchor() {
        let temp_dir = TempDir::new().unwrap();
        let packages_root = temp_dir.path().join("packages");
        fs::create_dir_all(packages_root.join("wire-core")).unwrap();
        fs::write(packages_root.join("wire-core/README.md"), "# wire\n").unwrap();

        let dir = resolve_target_directory(
            "repo/packages/wire-core/src/frame.ts",
            "wire",
            &packages_root,
        );
        assert_eq!(dir, "wire-core");
    }

    #[test]
    fn test_resolve_returns_empty_without_readme() {
        let temp_dir = TempDir::new().unwrap();
        let packages_root = temp_dir.path().join("packages");
        fs::create_dir_all(packages_root.join("bare/src")).unwrap();

        let dir = resolve_target_directory("packages/bare/src/mod.ts", "", &packages_root);
        assert_eq!(dir, "");
    }

    #[test]
    fn test_resolve_returns_empty_outside_packages() {
        let temp_dir = TempDir::new().unwrap();
        let packages_root = temp_dir.path().join("packages");
        fs::create_dir_all(&packages_root).unwrap();

        let dir = resolve_target_directory("tools/build.ts", "", &packages_root);
        assert_eq!(dir, "");
    }

    proptest! {
        #[test]
        fn prop_collapse_removes_every_newline(
            lines in prop::collection::vec("[a-zA-Z0-9 .,]{0,12}", 0..6)
        ) {
            let text = lines.join("\n");
            prop_assert!(!collapse_newlines(&text).contains('\n'));
        }

        #[test]
        fn prop_collapse_keeps_single_line_text_intact(s in "[a-zA-Z0-9 .,]{0,40}") {
            prop_assert_eq!(collapse_newlines(&s), s);
        }
    }
}
