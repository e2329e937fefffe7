//! Rule catalog: registry of all known schema rule-sets
//!
//! The catalog owns every [`SchemaRuleSet`] and indexes them by the
//! composite key (namespace, root element, version). It is built once,
//! is read-only afterwards, and is safe for concurrent shared reads by
//! any number of canonicalization calls.
//!
//! The builtin catalog ships the SAT complement definitions bundled under
//! `schemas/`; callers may also assemble their own catalog from YAML
//! definitions they provide.

use crate::config;
use crate::document::DocumentNode;
use crate::error::{EngineError, Result};
use crate::schema::{SchemaKey, SchemaRuleSet};
use std::collections::HashMap;

/// Schema definitions bundled with the crate, one file per version.
const BUILTIN_SCHEMAS: &[&str] = &[
    include_str!("../schemas/leyendasfisc10.yaml"),
    include_str!("../schemas/aerolineas10.yaml"),
    include_str!("../schemas/vehiculousado10.yaml"),
    include_str!("../schemas/divisas10.yaml"),
    include_str!("../schemas/donat11.yaml"),
    include_str!("../schemas/iedu10.yaml"),
    include_str!("../schemas/ecc11.yaml"),
    include_str!("../schemas/ecc12.yaml"),
];

/// Immutable, in-memory index of per-schema-version extraction rules.
///
/// # Example
///
/// ```ignore
/// use cadena_engine::RuleCatalog;
///
/// let catalog = RuleCatalog::builtin()?;
/// let rules = catalog.resolve(
///     "http://www.sat.gob.mx/leyendasFiscales",
///     "LeyendasFiscales",
///     "1.0",
/// )?;
/// ```
#[derive(Debug, Default)]
pub struct RuleCatalog {
    /// All rule-sets, keyed by (namespace, root, version)
    schemas: HashMap<SchemaKey, SchemaRuleSet>,
    /// (namespace, root) -> name of the root attribute carrying the version.
    /// All versions of one document family must agree on it, since it has
    /// to be read before the version is known.
    version_attributes: HashMap<(String, String), String>,
}

impl RuleCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog preloaded with the schema definitions shipped in this crate.
    pub fn builtin() -> Result<Self> {
        let mut catalog = Self::new();
        for content in BUILTIN_SCHEMAS {
            catalog.load_yaml(content)?;
        }
        Ok(catalog)
    }

    /// Parse a YAML schema definition and register it.
    pub fn load_yaml(&mut self, content: &str) -> Result<()> {
        self.register(SchemaRuleSet::from_yaml_str(content)?)
    }

    /// Register a rule-set under its own key.
    ///
    /// # Errors
    ///
    /// - `EngineError::DuplicateSchemaKey` if a rule-set with the same key
    ///   is already registered
    /// - `EngineError::InvalidSchema` if versions of the same document
    ///   family disagree on the version attribute, or the catalog is full
    pub fn register(&mut self, rules: SchemaRuleSet) -> Result<()> {
        if self.schemas.len() >= config::MAX_LOADED_SCHEMAS {
            return Err(EngineError::InvalidSchema(format!(
                "catalog is full ({} rule-sets)",
                config::MAX_LOADED_SCHEMAS
            )));
        }

        let key = rules.key().clone();
        if self.schemas.contains_key(&key) {
            return Err(EngineError::DuplicateSchemaKey(key));
        }

        let family = (key.namespace.clone(), key.root.clone());
        if let Some(existing) = self.version_attributes.get(&family) {
            if existing != rules.version_attribute() {
                return Err(EngineError::InvalidSchema(format!(
                    "{key}: version attribute '{}' conflicts with '{existing}' declared by another version",
                    rules.version_attribute()
                )));
            }
        } else {
            self.version_attributes
                .insert(family, rules.version_attribute().to_string());
        }

        tracing::debug!(schema = %key, total = self.schemas.len() + 1, "Registered schema rule-set");
        self.schemas.insert(key, rules);
        Ok(())
    }

    /// Exact-match lookup of a rule-set by schema identity.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::SchemaNotFound` if no entry matches.
    pub fn resolve(&self, namespace: &str, root: &str, version: &str) -> Result<&SchemaRuleSet> {
        let key = SchemaKey {
            namespace: namespace.to_string(),
            root: root.to_string(),
            version: version.to_string(),
        };
        self.schemas.get(&key).ok_or_else(move || EngineError::SchemaNotFound {
            namespace: key.namespace,
            root: key.root,
            version: key.version,
        })
    }

    /// Resolve the rule-set matching a parsed document's root node.
    ///
    /// Reads the document family's version attribute off the root and then
    /// performs an exact [`resolve`](Self::resolve).
    ///
    /// # Errors
    ///
    /// - `EngineError::SchemaNotFound` if the (namespace, root) family is
    ///   unknown, or the declared version has no registered rule-set
    /// - `EngineError::RequiredFieldMissing` if the version attribute is
    ///   absent from the root element
    pub fn resolve_document<N: DocumentNode>(&self, root: &N) -> Result<&SchemaRuleSet> {
        let namespace = root.namespace().unwrap_or("");
        let name = root.local_name();

        let version_attribute = self
            .version_attribute(namespace, name)
            .ok_or_else(|| EngineError::SchemaNotFound {
                namespace: namespace.to_string(),
                root: name.to_string(),
                version: "any".to_string(),
            })?;

        let version = root
            .attribute(version_attribute)
            .ok_or_else(|| EngineError::RequiredFieldMissing {
                element: name.to_string(),
                field: version_attribute.to_string(),
            })?;

        self.resolve(namespace, name, version)
    }

    /// Name of the root attribute carrying the version for a document
    /// family, or `None` if the family is unknown.
    pub fn version_attribute(&self, namespace: &str, root: &str) -> Option<&str> {
        self.version_attributes
            .get(&(namespace.to_string(), root.to_string()))
            .map(String::as_str)
    }

    /// Number of registered rule-sets.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the catalog holds no rule-sets.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Iterate over all registered schema keys.
    pub fn keys(&self) -> impl Iterator<Item = &SchemaKey> {
        self.schemas.keys()
    }
}
