//! Schema rule-set representation and loading
//!
//! A schema rule-set is the per-version canonicalization program for one
//! document family: for every element type it declares, in order, which
//! attributes and child elements contribute to the cadena original and
//! whether each is required or optional. Rule-sets are data, loaded from
//! YAML definitions; adding a new schema version means adding a definition
//! file, never new code.
//!
//! # Security Considerations
//!
//! Definitions may come from callers, so loading enforces:
//! - size limits (see [`crate::config::MAX_SCHEMA_YAML_SIZE`])
//! - element/field count limits
//! - referential integrity (element-kind fields must point at declared
//!   element rules - the engine never guesses a default rule)

use crate::config;
use crate::error::{EngineError, Result};
use crate::types::{Cardinality, FieldKind, Requirement};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identity of one schema rule-set.
///
/// Multiple keys may share a namespace or a root element name across SAT
/// revision history; the full triple is the lookup key and exactly one
/// entry must match a given document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaKey {
    /// XML namespace of the document family
    pub namespace: String,
    /// Local name of the root element
    pub root: String,
    /// Declared schema version, matched exactly
    pub version: String,
}

impl fmt::Display for SchemaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} v{}", self.namespace, self.root, self.version)
    }
}

/// One field of an element rule: an attribute to emit or a child element
/// to recurse into.
///
/// Order within the owning [`ElementRule`] is semantically significant and
/// defines the output order; it is fixed at catalog-load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Attribute name or child-element local name
    pub name: String,
    /// Whether this field is an attribute or a child element
    pub kind: FieldKind,
    /// Required/optional policy (defaults to required)
    #[serde(default)]
    pub requirement: Requirement,
    /// Single or repeated occurrence (defaults to single)
    #[serde(default)]
    pub cardinality: Cardinality,
}

impl FieldRule {
    /// Whether absence of this field aborts canonicalization.
    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }
}

/// The ordered extraction program for one element type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRule {
    /// Local name of the element this rule applies to
    pub element: String,
    /// Fields in emission order
    #[serde(default)]
    pub fields: Vec<FieldRule>,
}

/// `schema:` header of a YAML definition file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct SchemaIdentity {
    namespace: String,
    root: String,
    version: String,
    /// Root attribute carrying the version value. Older complements use
    /// "version", newer ones "Version".
    #[serde(default = "default_version_attribute")]
    version_attribute: String,
}

fn default_version_attribute() -> String {
    "Version".to_string()
}

/// Full YAML definition file shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct SchemaDefinition {
    schema: SchemaIdentity,
    elements: Vec<ElementRule>,
}

/// All extraction rules for one schema version.
///
/// Immutable once loaded; owned by the rule catalog, which is the sole
/// source of truth for rule data.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaRuleSet {
    key: SchemaKey,
    version_attribute: String,
    elements: HashMap<String, ElementRule>,
}

impl SchemaRuleSet {
    /// Load a rule-set from a YAML definition string.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidSchema` if the definition exceeds size
    /// or count limits, declares duplicate element rules, omits a rule for
    /// its own root, or references an undeclared element; and
    /// `EngineError::YamlError` if the YAML itself does not parse.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.len() > config::MAX_SCHEMA_YAML_SIZE {
            return Err(EngineError::InvalidSchema(format!(
                "definition size {} exceeds maximum of {} bytes",
                content.len(),
                config::MAX_SCHEMA_YAML_SIZE
            )));
        }

        let definition: SchemaDefinition = serde_yaml::from_str(content)?;
        Self::from_definition(definition)
    }

    fn from_definition(definition: SchemaDefinition) -> Result<Self> {
        let key = SchemaKey {
            namespace: definition.schema.namespace,
            root: definition.schema.root,
            version: definition.schema.version,
        };

        if definition.elements.is_empty() {
            return Err(EngineError::InvalidSchema(format!(
                "{key}: no element rules declared"
            )));
        }
        if definition.elements.len() > config::MAX_ELEMENT_RULES {
            return Err(EngineError::InvalidSchema(format!(
                "{key}: {} element rules exceed maximum of {}",
                definition.elements.len(),
                config::MAX_ELEMENT_RULES
            )));
        }

        let mut elements = HashMap::with_capacity(definition.elements.len());
        for rule in definition.elements {
            if rule.fields.len() > config::MAX_FIELDS_PER_ELEMENT {
                return Err(EngineError::InvalidSchema(format!(
                    "{key}: element '{}' declares {} fields, maximum is {}",
                    rule.element,
                    rule.fields.len(),
                    config::MAX_FIELDS_PER_ELEMENT
                )));
            }
            let name = rule.element.clone();
            if elements.insert(name.clone(), rule).is_some() {
                return Err(EngineError::InvalidSchema(format!(
                    "{key}: duplicate element rule '{name}'"
                )));
            }
        }

        if !elements.contains_key(&key.root) {
            return Err(EngineError::InvalidSchema(format!(
                "{key}: no rule for root element '{}'",
                key.root
            )));
        }

        // Element-kind fields must resolve at load time, not mid-walk
        for rule in elements.values() {
            for field in &rule.fields {
                if field.kind == FieldKind::Element && !elements.contains_key(&field.name) {
                    return Err(EngineError::InvalidSchema(format!(
                        "{key}: element '{}' references undeclared element '{}'",
                        rule.element, field.name
                    )));
                }
            }
        }

        tracing::debug!(schema = %key, elements = elements.len(), "Parsed schema rule-set");

        Ok(Self {
            key,
            version_attribute: definition.schema.version_attribute,
            elements,
        })
    }

    /// Identity of this rule-set.
    pub fn key(&self) -> &SchemaKey {
        &self.key
    }

    /// Root attribute that carries the schema version value.
    pub fn version_attribute(&self) -> &str {
        &self.version_attribute
    }

    /// Number of element rules in this rule-set.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Look up the extraction rule for an element type.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnknownElement` if the element has no declared
    /// rule, which indicates either a malformed document or a stale catalog.
    pub fn rule_for(&self, element: &str) -> Result<&ElementRule> {
        self.elements.get(element).ok_or_else(|| EngineError::UnknownElement {
            element: element.to_string(),
            schema: self.key.to_string(),
        })
    }
}
