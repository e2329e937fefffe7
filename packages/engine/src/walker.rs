//! Tree walker: recursive, data-driven token emission
//!
//! The walker is the generic interpreter at the heart of the engine. Each
//! element type has a fixed "what to emit and in what order" program (its
//! [`ElementRule`]); nested elements are handled by recursive dispatch to
//! the same interpreter keyed by element name. Adding a schema version
//! therefore requires only new catalog data, never new walker code.
//!
//! Traversal is pre-order and depth-first. Catalog order governs sibling
//! fields; repetitions of one child element preserve document order and are
//! never re-sorted.

use crate::config;
use crate::document::DocumentNode;
use crate::error::{EngineError, Result};
use crate::schema::{ElementRule, SchemaRuleSet};
use crate::selector;
use crate::types::{Cardinality, FieldKind, Token};

/// Emit the ordered token sequence for `node` and everything below it.
///
/// # Errors
///
/// - `EngineError::UnknownElement` if any visited element has no rule
/// - `EngineError::RequiredFieldMissing` / `RequiredChildMissing` when the
///   document omits required data
/// - `EngineError::DocumentTooDeep` past the recursion guard
pub fn walk<N: DocumentNode>(node: &N, rules: &SchemaRuleSet) -> Result<Vec<Token>> {
    walk_node(node, rules, 0)
}

fn walk_node<N: DocumentNode>(node: &N, rules: &SchemaRuleSet, depth: usize) -> Result<Vec<Token>> {
    if depth >= config::MAX_DOCUMENT_DEPTH {
        return Err(EngineError::DocumentTooDeep(config::MAX_DOCUMENT_DEPTH));
    }

    let rule = rules.rule_for(node.local_name())?;
    let mut tokens = Vec::with_capacity(rule.fields.len());

    for field in &rule.fields {
        match field.kind {
            FieldKind::Attribute => {
                tokens.push(selector::select_attribute(node, &rule.element, field)?);
            }
            FieldKind::Element => match field.cardinality {
                Cardinality::Single => match node.first_child_named(&field.name) {
                    Some(child) => tokens.extend(walk_node(&child, rules, depth + 1)?),
                    None if field.is_required() => {
                        return Err(missing_child(rule, field.name.clone()));
                    }
                    None => {}
                },
                Cardinality::Repeated => {
                    let children = node.children_named(&field.name);
                    if children.is_empty() && field.is_required() {
                        return Err(missing_child(rule, field.name.clone()));
                    }
                    for child in &children {
                        tokens.extend(walk_node(child, rules, depth + 1)?);
                    }
                }
            },
        }
    }

    tracing::trace!(element = %rule.element, tokens = tokens.len(), depth, "Walked element");
    Ok(tokens)
}

fn missing_child(rule: &ElementRule, child: String) -> EngineError {
    EngineError::RequiredChildMissing {
        element: rule.element.clone(),
        child,
    }
}
