//! TypeScript Extraction
//!
//! Walks tree-sitter syntax trees and pulls out documented API surface:
//! top-level classes (with their methods, properties and `@fires` events)
//! and type aliases. Doc comments are associated with the declaration that
//! immediately follows them, so extraction walks siblings in source order
//! instead of running detached queries.

use tree_sitter::Parser as TsParser;

use super::jsdoc::JsDoc;
use super::{RawEvent, RawMethod, RawModuleDoc, RawProperty};
use crate::types::{ModuleKind, Result, StitchError, Visibility};

pub struct TypeScriptExtractor {
    language: tree_sitter::Language,
}

impl TypeScriptExtractor {
    pub fn new() -> Result<Self> {
        let language: tree_sitter::Language = tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into();

        // Fail fast on grammar/runtime version mismatch
        let mut parser = TsParser::new();
        parser.set_language(&language).map_err(|e| {
            StitchError::parse(format!("Failed to set TypeScript language: {}", e), "")
        })?;

        Ok(Self { language })
    }

    /// Extract all module docs from one source file.
    /// `path` is the root-relative path recorded on every extracted module.
    pub fn extract_file(&self, path: &str, content: &str) -> Result<Vec<RawModuleDoc>> {
        let mut parser = TsParser::new();
        parser.set_language(&self.language).map_err(|e| {
            StitchError::parse(format!("Failed to set TypeScript language: {}", e), path)
        })?;

        let tree = parser.parse(content, None).ok_or_else(|| {
            StitchError::parse("Failed to parse TypeScript file".to_string(), path)
        })?;

        let mut modules = Vec::new();
        collect_modules(tree.root_node(), content, path, &mut modules);
        Ok(modules)
    }
}

// =============================================================================
// Tree Walking
// =============================================================================

fn collect_modules(
    root: tree_sitter::Node,
    content: &str,
    path: &str,
    modules: &mut Vec<RawModuleDoc>,
) {
    let mut cursor = root.walk();
    let mut pending_comment: Option<tree_sitter::Node> = None;

    for child in root.named_children(&mut cursor) {
        match child.kind() {
            "comment" => pending_comment = Some(child),
            "export_statement" => {
                let comment = pending_comment.take();
                if let Some(declaration) = child.child_by_field_name("declaration") {
                    handle_declaration(declaration, comment, content, path, modules);
                }
            }
            _ => {
                let comment = pending_comment.take();
                handle_declaration(child, comment, content, path, modules);
            }
        }
    }
}

fn handle_declaration(
    node: tree_sitter::Node,
    comment: Option<tree_sitter::Node>,
    content: &str,
    path: &str,
    modules: &mut Vec<RawModuleDoc>,
) {
    match node.kind() {
        "class_declaration" | "abstract_class_declaration" => {
            if let Some(module) = extract_class(node, comment, content, path) {
                modules.push(module);
            }
        }
        "type_alias_declaration" => {
            if let Some(name_node) = node.child_by_field_name("name") {
                let doc = parse_doc(comment, content);
                modules.push(RawModuleDoc {
                    name: text(name_node, content).to_string(),
                    kind: ModuleKind::TypeAlias,
                    path: path.to_string(),
                    documentation: doc.filter(JsDoc::is_documented).map(|d| d.description),
                    methods: Vec::new(),
                    properties: Vec::new(),
                    events: Vec::new(),
                });
            }
        }
        _ => {}
    }
}

fn extract_class(
    node: tree_sitter::Node,
    comment: Option<tree_sitter::Node>,
    content: &str,
    path: &str,
) -> Option<RawModuleDoc> {
    let name_node = node.child_by_field_name("name")?;
    let doc = parse_doc(comment, content);

    // Events come from the class doc comment, one per @fires/@event tag
    let events = doc
        .as_ref()
        .map(|d| {
            d.events()
                .into_iter()
                .map(|value| RawEvent {
                    documentation: value.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    let mut module = RawModuleDoc {
        name: text(name_node, content).to_string(),
        kind: ModuleKind::Class,
        path: path.to_string(),
        documentation: doc
            .filter(JsDoc::is_documented)
            .map(|d| d.description),
        methods: Vec::new(),
        properties: Vec::new(),
        events,
    };

    if let Some(body) = node.child_by_field_name("body") {
        collect_members(body, content, &mut module);
    }

    Some(module)
}

fn collect_members(body: tree_sitter::Node, content: &str, module: &mut RawModuleDoc) {
    let mut cursor = body.walk();
    let mut pending_comment: Option<tree_sitter::Node> = None;

    for member in body.named_children(&mut cursor) {
        match member.kind() {
            "comment" => pending_comment = Some(member),
            "method_definition" | "abstract_method_signature" => {
                let doc = parse_doc(pending_comment.take(), content);
                if let Some(method) = extract_method(member, doc, content) {
                    module.methods.push(method);
                }
            }
            "public_field_definition" => {
                let doc = parse_doc(pending_comment.take(), content);
                if let Some(property) = extract_property(member, doc, content) {
                    module.properties.push(property);
                }
            }
            // A comment never carries past an unrelated member
            _ => pending_comment = None,
        }
    }
}

fn extract_method(
    node: tree_sitter::Node,
    doc: Option<JsDoc>,
    content: &str,
) -> Option<RawMethod> {
    let name_node = node.child_by_field_name("name")?;
    let (visibility, is_static) = member_modifiers(node, content);

    // Signature runs from the member name up to the body; bodiless
    // declarations (abstract) keep everything except the trailing semicolon
    let signature = match node.child_by_field_name("body") {
        Some(body) => content
            .get(name_node.start_byte()..body.start_byte())
            .unwrap_or("")
            .trim_end()
            .to_string(),
        None => content
            .get(name_node.start_byte()..node.end_byte())
            .unwrap_or("")
            .trim_end()
            .trim_end_matches(';')
            .trim_end()
            .to_string(),
    };

    Some(RawMethod {
        signature,
        visibility,
        is_static,
        documentation: doc.filter(JsDoc::is_documented).map(|d| d.description),
    })
}

fn extract_property(
    node: tree_sitter::Node,
    doc: Option<JsDoc>,
    content: &str,
) -> Option<RawProperty> {
    let name_node = node.child_by_field_name("name")?;
    let (visibility, is_static) = member_modifiers(node, content);

    // The type annotation node text includes the leading colon
    let prop_type = node
        .child_by_field_name("type")
        .map(|t| text(t, content).trim_start_matches(':').trim().to_string());

    Some(RawProperty {
        name: text(name_node, content).to_string(),
        prop_type,
        visibility,
        is_static,
        documentation: doc.filter(JsDoc::is_documented).map(|d| d.description),
    })
}

/// Read accessibility and static-ness off a class member.
/// The `static` keyword is an anonymous node, so this walks all children.
fn member_modifiers(node: tree_sitter::Node, content: &str) -> (Visibility, bool) {
    let mut visibility = Visibility::Public;
    let mut is_static = false;

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "accessibility_modifier" => {
                if let Some(parsed) = Visibility::from_keyword(text(child, content)) {
                    visibility = parsed;
                }
            }
            "static" => is_static = true,
            _ => {}
        }
    }

    (visibility, is_static)
}

fn parse_doc(comment: Option<tree_sitter::Node>, content: &str) -> Option<JsDoc> {
    comment.and_then(|c| JsDoc::parse(text(c, content)))
}

fn text<'a>(node: tree_sitter::Node, content: &'a str) -> &'a str {
    node.utf8_text(content.as_bytes()).unwrap_or("")
}

// =============================================================================
// Tests
// =============================================================================
