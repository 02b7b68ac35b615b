use super::{
    NodePtr,
    refs::{BackRef, Refs},
};
use crate::variant::Variant;
use core::fmt::Debug;

/// A single node reference.
pub struct RefsSingle<V>(Option<NodePtr<V>>)
where
    V: Variant;

impl<V: Variant> Clone for RefsSingle<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Variant> Copy for RefsSingle<V> {}

impl<V: Variant> PartialEq for RefsSingle<V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<V: Variant> Debug for RefsSingle<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("RefsSingle").field(&self.0).finish()
    }
}

impl<V: Variant> Refs for RefsSingle<V> {
    #[inline(always)]
    fn empty() -> Self {
        Self(None)
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    #[inline(always)]
    fn clear(&mut self) {
        _ = self.0.take();
    }
}

impl<V: Variant> BackRef<V> for RefsSingle<V> {
    #[inline(always)]
    fn back(&self) -> Option<NodePtr<V>> {
        self.0
    }

    #[inline(always)]
    fn links_back_to(&self, node: &NodePtr<V>) -> bool {
        self.0.as_ref() == Some(node)
    }
}

impl<V: Variant> RefsSingle<V> {
    /// Creates a reference to the node at `node_ptr`; or an empty reference if it is None.
    pub fn new(node_ptr: Option<NodePtr<V>>) -> Self {
        Self(node_ptr)
    }

    /// Returns the pointer to the referenced node.
    pub fn get(&self) -> Option<NodePtr<V>> {
        self.0
    }

    /// Sets the pointer to the referenced node with the given `node_ptr`.
    pub fn set(&mut self, node_ptr: Option<NodePtr<V>>) {
        self.0 = node_ptr
    }

    /// Sets the pointer to the referenced node with the given `node_ptr`.
    pub fn set_some(&mut self, node_ptr: NodePtr<V>) {
        self.0 = Some(node_ptr)
    }

    /// Un-sets the reference.
    pub fn set_none(&mut self) {
        self.0 = None
    }

    /// Returns true if the reference points to the node at `node_ptr`.
    pub fn points_to(&self, node_ptr: &NodePtr<V>) -> bool {
        self.0.as_ref() == Some(node_ptr)
    }
}
