//! Cadena Engine
//!
//! Canonicalization engine for SAT CFDI complements: generates the
//! deterministic "cadena original" of a structured fiscal document, the
//! exact byte sequence that gets cryptographically signed and later
//! verified.
//!
//! This library provides functionality for:
//! - Loading versioned schema rule-sets from YAML definitions (the rule
//!   catalog is data, not code)
//! - Resolving the correct rule-set for a document by namespace, root
//!   element and declared version
//! - Walking a parsed document tree and emitting its delimited cadena
//!
//! # Example
//!
//! ```ignore
//! use cadena_engine::{Canonicalizer, RuleCatalog};
//!
//! let catalog = RuleCatalog::builtin()?;
//! let doc = roxmltree::Document::parse(xml)?;
//! let cadena = Canonicalizer::new(&catalog).canonicalize(&doc.root_element())?;
//! let digest = cadena_engine::cadena_digest(&cadena);
//! ```

pub mod canonicalizer;
pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod schema;
pub mod selector;
pub mod types;
pub mod walker;
pub mod xml;

// Re-export commonly used items
pub use canonicalizer::{cadena_digest, Canonicalizer};
pub use catalog::RuleCatalog;
pub use document::DocumentNode;
pub use error::{EngineError, Result};
pub use schema::{ElementRule, FieldRule, SchemaKey, SchemaRuleSet};
pub use types::{Cardinality, FieldKind, Requirement, Token, DELIMITER};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
