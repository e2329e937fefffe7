//! Error types for the cadena engine

use crate::schema::SchemaKey;
use thiserror::Error;

/// Main error type for engine operations.
///
/// None of these are recoverable inside the engine: the inputs are static,
/// so a retry cannot change the outcome. Callers should treat a failed
/// canonicalization as a document-validity problem, not a transient fault.
#[derive(Error, Debug)]
pub enum EngineError {
    /// No rule-set in the catalog matches the document's schema identity
    #[error("no schema registered for namespace '{namespace}', root '{root}', version '{version}'")]
    SchemaNotFound {
        namespace: String,
        root: String,
        version: String,
    },

    /// The document contains an element type with no declared rule.
    /// Indicates a malformed document or a stale catalog.
    #[error("element '{element}' has no rule in schema {schema}")]
    UnknownElement { element: String, schema: String },

    /// A required attribute-kind field has no value
    #[error("required attribute '{field}' missing on element '{element}'")]
    RequiredFieldMissing { element: String, field: String },

    /// A required element-kind field has zero matching children
    #[error("required child '{child}' missing under element '{element}'")]
    RequiredChildMissing { element: String, child: String },

    /// Catalog construction found two rule-sets for the same key
    #[error("duplicate schema rule-set for {0}")]
    DuplicateSchemaKey(SchemaKey),

    /// A schema definition failed structural validation at load time
    #[error("invalid schema definition: {0}")]
    InvalidSchema(String),

    /// YAML parsing error while loading a schema definition
    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Document nesting exceeded the recursion guard
    #[error("document nesting exceeds maximum depth of {0}")]
    DocumentTooDeep(usize),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
