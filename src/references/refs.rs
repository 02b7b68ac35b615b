use crate::{NodePtr, Variant};
use core::fmt::Debug;

/// References among nodes.
pub trait Refs: Clone + Debug {
    /// Creates an empty references.
    fn empty() -> Self;

    /// Returns true if the references collection is empty.
    fn is_empty(&self) -> bool;

    /// Clears the references.
    fn clear(&mut self);
}

/// References pointing back to the predecessor of a node.
///
/// * `RefsNone` for singly linked nodes which do not know their predecessor.
/// * `RefsSingle` for doubly linked nodes.
///
/// Walking, comparing and formatting routines are written once against this
/// capability and serve both node kinds.
pub trait BackRef<V: Variant>: Refs {
    /// Returns the pointer to the predecessor; None if there is no back reference.
    fn back(&self) -> Option<NodePtr<V>>;

    /// Returns true if this back reference is consistent with `node` being the predecessor.
    ///
    /// A node kind without back references is always consistent.
    fn links_back_to(&self, node: &NodePtr<V>) -> bool;
}
