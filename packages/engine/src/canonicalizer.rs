//! Canonicalizer: orchestrates rule resolution, walking and joining
//!
//! Produces the cadena original of a parsed document: the exact byte
//! sequence that gets cryptographically signed and later verified. Any
//! deviation (extra or missing delimiter, wrong field order, wrong
//! optional-omission behavior) produces a signature that fails external
//! verification even though the program completes "successfully", so the
//! output is returned verbatim - no trimming, no added escaping.

use crate::catalog::RuleCatalog;
use crate::document::DocumentNode;
use crate::error::Result;
use crate::types::{Token, DELIMITER};
use crate::walker;
use sha2::{Digest, Sha256};

/// Generates cadenas originales against a fixed rule catalog.
///
/// Cheap to construct; borrows the catalog, which is safe to share across
/// threads once built.
///
/// # Example
///
/// ```ignore
/// use cadena_engine::{Canonicalizer, RuleCatalog};
///
/// let catalog = RuleCatalog::builtin()?;
/// let doc = roxmltree::Document::parse(xml)?;
/// let cadena = Canonicalizer::new(&catalog).canonicalize(&doc.root_element())?;
/// ```
pub struct Canonicalizer<'a> {
    catalog: &'a RuleCatalog,
}

impl<'a> Canonicalizer<'a> {
    /// Create a canonicalizer over a loaded catalog.
    pub fn new(catalog: &'a RuleCatalog) -> Self {
        Self { catalog }
    }

    /// Produce the cadena original for a parsed document.
    ///
    /// Resolves the rule-set from the root's namespace, local name and
    /// declared version, walks the tree, and joins the token stream with
    /// `|` markers at both ends: `|t1|t2|...|tn|`.
    ///
    /// # Errors
    ///
    /// All engine errors abort the call; no partial string is returned.
    pub fn canonicalize<N: DocumentNode>(&self, root: &N) -> Result<String> {
        let rules = self.catalog.resolve_document(root)?;
        tracing::debug!(schema = %rules.key(), "Resolved schema for document");

        let tokens = walker::walk(root, rules)?;
        Ok(join_tokens(&tokens))
    }
}

/// Join a token stream into the delimited cadena form.
///
/// Placeholder tokens contribute empty segments; the delimiter count per
/// schema version never collapses because of omitted optional data.
fn join_tokens(tokens: &[Token]) -> String {
    let mut cadena = String::with_capacity(
        tokens.iter().map(|t| t.as_str().len() + 1).sum::<usize>() + 1,
    );
    cadena.push(DELIMITER);
    for token in tokens {
        cadena.push_str(token.as_str());
        cadena.push(DELIMITER);
    }
    cadena
}

/// Lowercase SHA-256 hex digest of a cadena original.
///
/// This is the digest the external signing step consumes (the SAT sello is
/// an RSA signature over the SHA-256 of the cadena bytes). Kept here so
/// callers sign exactly the bytes the engine produced.
pub fn cadena_digest(cadena: &str) -> String {
    hex::encode(Sha256::digest(cadena.as_bytes()))
}
