//! Field selector: attribute extraction under required/optional policy
//!
//! The selector handles the attribute-level fields of a single element.
//! Element-kind fields are markers consumed by the tree walker, which
//! interleaves attribute tokens and nested-element tokens in declared
//! order.
//!
//! Presence, not non-emptiness, is what satisfies a required field: an
//! attribute that exists with an empty value is a valid value. The same
//! presence-based reading applies to optional fields, so a present-but-empty
//! optional attribute emits an empty-valued token rather than being treated
//! as absent.

use crate::document::DocumentNode;
use crate::error::{EngineError, Result};
use crate::schema::FieldRule;
use crate::types::{Requirement, Token};

/// Extract the token for one attribute-kind field of `node`.
///
/// # Arguments
/// * `node` - Element the field belongs to
/// * `element` - Element name, for error reporting
/// * `field` - The attribute-kind field rule to apply
///
/// # Errors
///
/// Returns `EngineError::RequiredFieldMissing` when a required attribute
/// is absent. An absent optional attribute yields [`Token::Empty`], which
/// keeps the field's delimiter position in the cadena.
pub fn select_attribute<N: DocumentNode>(
    node: &N,
    element: &str,
    field: &FieldRule,
) -> Result<Token> {
    match node.attribute(&field.name) {
        Some(value) => Ok(Token::value(value)),
        None => match field.requirement {
            Requirement::Required => Err(EngineError::RequiredFieldMissing {
                element: element.to_string(),
                field: field.name.clone(),
            }),
            Requirement::Optional => Ok(Token::Empty),
        },
    }
}
