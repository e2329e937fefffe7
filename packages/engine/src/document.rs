//! Read-only document tree contract consumed by the engine
//!
//! Parsing a document into a tree is a collaborator concern; the engine
//! only needs name, namespace, attribute and child lookups. The trait is
//! implemented for `roxmltree` nodes in [`crate::xml`], and test suites
//! may provide their own implementations.

/// Abstract tree node of a parsed document.
///
/// The engine treats nodes as read-only and never stores them beyond a
/// single canonicalization call.
pub trait DocumentNode: Sized {
    /// Local (namespace-stripped) element name.
    fn local_name(&self) -> &str;

    /// Namespace URI of this element, if any.
    fn namespace(&self) -> Option<&str>;

    /// Look up an attribute by its unqualified name.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// All child elements with the given local name, in document order.
    fn children_named(&self, name: &str) -> Vec<Self>;

    /// First child element with the given local name, if any.
    fn first_child_named(&self, name: &str) -> Option<Self> {
        self.children_named(name).into_iter().next()
    }
}
