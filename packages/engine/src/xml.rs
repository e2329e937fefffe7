//! roxmltree adapter for the [`DocumentNode`] contract
//!
//! Children are matched on local name and element-ness only; the complement
//! schemas qualify elements with a single namespace prefix, which the local
//! name comparison deliberately ignores. Attributes in CFDI documents are
//! unqualified, so attribute lookup uses the plain name.

use crate::document::DocumentNode;
use roxmltree::Node;

impl<'a, 'input> DocumentNode for Node<'a, 'input> {
    fn local_name(&self) -> &str {
        self.tag_name().name()
    }

    fn namespace(&self) -> Option<&str> {
        self.tag_name().namespace()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes().find(|a| a.name() == name).map(|a| a.value())
    }

    fn children_named(&self, name: &str) -> Vec<Self> {
        self.children()
            .filter(|child| child.is_element() && child.tag_name().name() == name)
            .collect()
    }
}
