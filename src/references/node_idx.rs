use super::NodePtr;
use crate::{LinkedNodes, MemoryState, Node, NodeIdxError, Variant};
use core::fmt::Debug;
use orx_pinned_vec::PinnedVec;

/// A node index providing safe and checked access to nodes of a [`LinkedNodes`].
///
/// Unlike [`NodePtr`], the index remembers the memory state of the collection it
/// is created from; it is therefore able to tell a node which takes the position of
/// an earlier node, after a `clear` or a release, apart from the node it was created for.
pub struct NodeIdx<V: Variant> {
    ptr: NodePtr<V>,
    state: MemoryState,
}

impl<V: Variant> core::hash::Hash for NodeIdx<V> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.ptr.hash(state);
        self.state.hash(state);
    }
}

// Only the pointer is copied, so "V" does not need to be copy itself.
impl<V: Variant> Copy for NodeIdx<V> {}

impl<V: Variant> Clone for NodeIdx<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Variant> Debug for NodeIdx<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeIdx")
            .field("ptr", &self.ptr)
            .field("state", &self.state)
            .finish()
    }
}

impl<V: Variant> PartialEq for NodeIdx<V> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr && self.state == other.state
    }
}

impl<V: Variant> Eq for NodeIdx<V> {}

impl<V> NodeIdx<V>
where
    V: Variant,
{
    /// Creates a new index for the element at the given `node_ptr`
    /// and the collection with the given `state`.
    #[inline(always)]
    pub fn new(state: MemoryState, node_ptr: NodePtr<V>) -> Self {
        Self {
            ptr: node_ptr,
            state,
        }
    }

    /// Checks whether or not the `state` of the index matches that of this index.
    #[inline(always)]
    pub fn is_in_state(&self, state: MemoryState) -> bool {
        self.state == state
    }

    /// Converts the node index into a node pointer.
    #[inline(always)]
    pub fn node_ptr(&self) -> NodePtr<V> {
        self.ptr
    }

    /// Returns the reason why this index cannot be used for the `collection`;
    /// None if it is valid.
    pub fn invalidity_reason_for<P>(&self, collection: &LinkedNodes<V, P>) -> Option<NodeIdxError>
    where
        P: PinnedVec<Node<V>>,
    {
        self.node(collection).err()
    }

    /// Returns true only if this index is valid for the given `collection`.
    ///
    /// A node index is valid iff it satisfies the following conditions:
    ///
    /// * It is created from the given `collection`.
    /// * The `collection` has not been cleared, and has not reused positions of released
    ///   nodes, since this index was created.
    /// * The node has not been released.
    #[inline(always)]
    pub fn is_valid_for<P>(&self, collection: &LinkedNodes<V, P>) -> bool
    where
        P: PinnedVec<Node<V>>,
    {
        self.node(collection).is_ok()
    }

    /// Returns a reference to the node in the `collection`; or the reason why
    /// the index is not valid for it.
    pub fn node<'a, P>(
        &self,
        collection: &'a LinkedNodes<V, P>,
    ) -> Result<&'a Node<V>, NodeIdxError>
    where
        P: PinnedVec<Node<V>>,
    {
        if !self.is_in_state(collection.memory_state()) {
            return Err(NodeIdxError::ReorganizedCollection);
        }

        collection
            .get_node(&self.ptr)
            .ok_or(NodeIdxError::OutOfBounds)
            .and_then(|node| match node.is_active() {
                true => Ok(node),
                false => Err(NodeIdxError::RemovedNode),
            })
    }

    /// Returns a mutable reference to the node in the `collection`; or the reason
    /// why the index is not valid for it.
    pub fn node_mut<'a, P>(
        &self,
        collection: &'a mut LinkedNodes<V, P>,
    ) -> Result<&'a mut Node<V>, NodeIdxError>
    where
        P: PinnedVec<Node<V>>,
    {
        if !self.is_in_state(collection.memory_state()) {
            return Err(NodeIdxError::ReorganizedCollection);
        }

        collection
            .get_node_mut(&self.ptr)
            .ok_or(NodeIdxError::OutOfBounds)
            .and_then(|node| match node.is_active() {
                true => Ok(node),
                false => Err(NodeIdxError::RemovedNode),
            })
    }
}
