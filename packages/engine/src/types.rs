//! Core vocabulary for the canonicalization engine

use serde::{Deserialize, Serialize};

/// Field separator and boundary marker of the cadena original (ASCII 0x7C).
pub const DELIMITER: char = '|';

/// One emitted fragment of the cadena original.
///
/// Tokens are produced in strict rule-declaration order and never reordered.
/// They are ephemeral: produced and consumed within a single canonicalization
/// call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A field's value, verbatim. May itself be the empty string when the
    /// source attribute is present but empty.
    Value(String),
    /// Placeholder for an optional field with no value. Keeps the field's
    /// delimiter position, so the segment count per schema version is fixed
    /// regardless of which optional data a document happens to omit.
    Empty,
}

impl Token {
    /// Build a value token from anything string-like.
    pub fn value(value: impl Into<String>) -> Self {
        Token::Value(value.into())
    }

    /// The string content this token contributes to the cadena.
    ///
    /// Placeholders contribute the empty string.
    pub fn as_str(&self) -> &str {
        match self {
            Token::Value(value) => value,
            Token::Empty => "",
        }
    }
}

/// What a field rule refers to on its owning element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// An attribute of the element, extracted by the field selector.
    Attribute,
    /// A child element, recursed into by the tree walker.
    Element,
}

/// Catalog-declared policy on whether a field's absence is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    /// Absence aborts canonicalization of the whole document.
    Required,
    /// Absence is tolerated; the field's position is kept as an empty slot
    /// (attributes) or elided entirely (child elements).
    Optional,
}

impl Default for Requirement {
    fn default() -> Self {
        Requirement::Required
    }
}

/// How many occurrences of a child element a field rule covers.
///
/// Only meaningful for [`FieldKind::Element`] fields; attribute fields are
/// always single.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// Exactly zero or one child with this name.
    Single,
    /// Any number of children, emitted in document order.
    Repeated,
}

impl Default for Cardinality {
    fn default() -> Self {
        Cardinality::Single
    }
}
