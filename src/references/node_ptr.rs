use crate::{LinkedNodes, Node, Variant};
use core::fmt::Debug;
use orx_pinned_vec::PinnedVec;

/// A wrapper around a node pointer.
///
/// The pointer is only an identity of a node; it is never dereferenced.
/// Nodes are accessed by resolving the pointer against the [`LinkedNodes`]
/// that owns them, which returns None for pointers of other collections.
pub struct NodePtr<V: Variant> {
    ptr: *const Node<V>,
}

unsafe impl<V: Variant> Send for NodePtr<V> where V::Item: Send {}

unsafe impl<V: Variant> Sync for NodePtr<V> where V::Item: Sync {}

impl<V: Variant> PartialEq for NodePtr<V> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<V: Variant> Eq for NodePtr<V> {}

impl<V: Variant> core::hash::Hash for NodePtr<V> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.ptr.hash(state);
    }
}

impl<V: Variant> Debug for NodePtr<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodePtr")
            .field("ptr", &(self.ptr as usize))
            .finish()
    }
}

// Only the pointer is copied, so "V" does not need to be copy itself.
impl<V: Variant> Copy for NodePtr<V> {}

impl<V: Variant> Clone for NodePtr<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Variant> NodePtr<V> {
    /// Creates a new node pointer by wrapping the given `ptr`.
    pub fn new(ptr: *const Node<V>) -> Self {
        Self { ptr }
    }

    /// Returns true if:
    ///
    /// * `collection` owns the node this pointer is pointing at, and
    /// * the node is still active; i.e., it has not been released.
    #[inline(always)]
    pub fn is_valid_for<P>(&self, collection: &LinkedNodes<V, P>) -> bool
    where
        P: PinnedVec<Node<V>>,
    {
        collection.get_node(self).is_some_and(|x| x.is_active())
    }

    /// Returns the const raw pointer to the node.
    #[inline(always)]
    pub fn ptr(&self) -> *const Node<V> {
        self.ptr
    }
}
