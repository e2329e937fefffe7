//! Configuration constants for the cadena engine
//!
//! Centralized limits used throughout the engine for:
//! - Security limits (prevent DoS via hostile schema files)
//! - Resource constraints (memory)
//! - Recursion depth limits (prevent stack overflow)
//!
//! Currently these are compile-time constants. Schema files are normally
//! shipped with the crate, but the catalog also accepts caller-provided
//! definitions, so the same limits apply to both.

/// Maximum schema definition size in bytes (1 MB).
///
/// Prevents YAML bomb attacks and excessive memory usage during parsing.
/// Real SAT complement definitions are 1-10 KB.
pub const MAX_SCHEMA_YAML_SIZE: usize = 1_000_000;

/// Maximum number of schema rule-sets a catalog will hold.
///
/// The full SAT complement zoo across all revisions is a few dozen
/// rule-sets; 500 leaves generous headroom while bounding memory.
pub const MAX_LOADED_SCHEMAS: usize = 500;

/// Maximum number of element rules within one schema definition.
///
/// The largest real complements (nomina, pagos) declare fewer than 40
/// element types.
pub const MAX_ELEMENT_RULES: usize = 200;

/// Maximum number of field rules within one element rule.
///
/// The widest real element (cfdi:Comprobante) has around 25 attributes.
pub const MAX_FIELDS_PER_ELEMENT: usize = 200;

/// Maximum document nesting depth during tree walking.
///
/// Prevents stack overflow on hostile documents. Real complements nest
/// at most 5-6 levels deep.
pub const MAX_DOCUMENT_DEPTH: usize = 64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_reasonable() {
        // Sanity checks that limits are within reasonable bounds
        assert!(MAX_SCHEMA_YAML_SIZE >= 100_000, "Should allow at least 100KB");
        assert!(MAX_SCHEMA_YAML_SIZE <= 10_000_000, "Should not allow 10MB+");

        assert!(MAX_LOADED_SCHEMAS >= 50, "Should hold the full complement zoo");
        assert!(MAX_LOADED_SCHEMAS <= 10_000, "Should not allow unbounded catalogs");

        assert!(MAX_ELEMENT_RULES >= 40, "Should fit the largest complements");
        assert!(MAX_FIELDS_PER_ELEMENT >= 30, "Should fit the widest elements");

        assert!(MAX_DOCUMENT_DEPTH >= 10, "Should allow real nesting");
        assert!(MAX_DOCUMENT_DEPTH <= 256, "Should limit extreme depth");
    }
}
