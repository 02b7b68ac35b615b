use crate::{
    Chain, MemoryState, Node, NodeIdx, NodePtr, Utilization, Variant,
    format::FormatSymbols,
    iter::{NodePtrIter, ValueIter},
    references::{BackRef, Refs},
};
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::{fmt::Display, marker::PhantomData};
use orx_fixed_vec::FixedVec;
use orx_pinned_vec::PinnedVec;
use orx_split_vec::{Recursive, SplitVec};

/// Linked nodes with a fixed capacity storage.
///
/// Pushing more nodes than the capacity panics.
pub type FixedLinkedNodes<V> = LinkedNodes<V, FixedVec<Node<V>>>;

/// Storage owning the nodes of any number of singly or doubly linked lists.
///
/// Nodes are stored in a pinned vector so that the memory location of a node never
/// changes while it is alive. This allows a node to be identified by its [`NodePtr`],
/// which is what `prev` and `next` links hold.
///
/// * The storage owns the nodes, neither `next` nor `prev` links do.
/// * [`release`] closes a node together with the nodes reachable from it by following `next`
///   links, which is the chain that was built together; `prev` links are never followed.
/// * Positions of released nodes are reused by later pushes. Before the first reuse after
///   a release, every link to a released node is cleared and the memory state changes.
/// * Dropping the storage drops all nodes.
///
/// Walking operations treat a link that does not resolve to an active node of this storage
/// as the end of the chain. They do not detect cycles; walking a chain with a cycle that a
/// caller built by hand does not terminate.
///
/// [`release`]: LinkedNodes::release
pub struct LinkedNodes<V, P = SplitVec<Node<V>, Recursive>>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    nodes: P,
    len: usize,
    state: MemoryState,
    vacant: Vec<usize>,
    links_to_closed: bool,
    phantom: PhantomData<V>,
}

impl<V, P> Default for LinkedNodes<V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> LinkedNodes<V, FixedVec<Node<V>>>
where
    V: Variant,
{
    /// Creates a new empty storage which can hold at most `capacity` nodes.
    pub fn with_fixed_capacity(capacity: usize) -> Self {
        Self::with_pinned_vec(FixedVec::new(capacity))
    }
}

impl<V, P> LinkedNodes<V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    /// Creates a new empty storage.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self::with_pinned_vec(P::default())
    }

    /// Creates a new empty storage using the given pinned vector as the underlying storage.
    ///
    /// The pinned vector is cleared before use.
    pub fn with_pinned_vec(mut nodes: P) -> Self {
        nodes.clear();
        Self {
            nodes,
            len: 0,
            state: MemoryState::default(),
            vacant: Vec::new(),
            links_to_closed: false,
            phantom: PhantomData,
        }
    }

    // get

    /// Returns the number of active nodes of all chains in the storage.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether or not there exists any active node in the storage.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns current node utilization of the storage.
    pub fn utilization(&self) -> Utilization {
        Utilization {
            capacity: self.nodes.capacity(),
            num_active_nodes: self.len,
            num_closed_nodes: self.nodes.len() - self.len,
        }
    }

    /// Returns the memory state of the storage.
    #[inline(always)]
    pub fn memory_state(&self) -> MemoryState {
        self.state
    }

    /// Returns a reference to the underlying nodes storage.
    #[inline(always)]
    pub fn nodes(&self) -> &P {
        &self.nodes
    }

    /// Returns a reference to the node with the given `node_ptr`;
    /// None if the node does not belong to this storage.
    ///
    /// Note that the returned node might be closed.
    pub fn get_node(&self, node_ptr: &NodePtr<V>) -> Option<&Node<V>> {
        self.nodes
            .index_of_ptr(node_ptr.ptr())
            .and_then(|position| self.nodes.get(position))
    }

    /// Returns a reference to the node with the given `node_ptr`.
    ///
    /// # Panics
    ///
    /// Panics if the node does not belong to this storage.
    pub fn node(&self, node_ptr: &NodePtr<V>) -> &Node<V> {
        self.get_node(node_ptr)
            .expect("Pointer does not belong to the collection")
    }

    /// Returns a reference to the value of the node with the given `node_ptr`;
    /// None if the node does not belong to this storage or is closed.
    pub fn value(&self, node_ptr: &NodePtr<V>) -> Option<&V::Item> {
        self.get_node(node_ptr).and_then(|x| x.value())
    }

    /// Creates a node index for the node with the given `node_ptr` bundled with the current
    /// memory state of the storage.
    pub fn node_idx(&self, node_ptr: &NodePtr<V>) -> NodeIdx<V> {
        NodeIdx::new(self.state, *node_ptr)
    }

    pub(crate) fn active_node(&self, node_ptr: &NodePtr<V>) -> Option<&Node<V>> {
        self.get_node(node_ptr).filter(|x| x.is_active())
    }

    pub(crate) fn is_active(&self, node_ptr: &NodePtr<V>) -> bool {
        self.active_node(node_ptr).is_some()
    }

    fn is_closed(&self, node_ptr: &NodePtr<V>) -> bool {
        self.get_node(node_ptr).is_some_and(|x| x.is_closed())
    }

    // traverse

    /// Returns the node following the node at `node_ptr`; None if it is the last node of its chain.
    pub fn next_of(&self, node_ptr: &NodePtr<V>) -> Option<NodePtr<V>> {
        self.active_node(node_ptr)?
            .next()
            .get()
            .filter(|next| self.is_active(next))
    }

    pub(crate) fn back_of(&self, node_ptr: &NodePtr<V>) -> Option<NodePtr<V>> {
        self.active_node(node_ptr)?
            .prev()
            .back()
            .filter(|prev| self.is_active(prev))
    }

    /// Returns the last node of the chain that `node_ptr` belongs to; i.e., the node
    /// reached by following `next` links until there is none.
    ///
    /// Returns `node_ptr` itself if it is the last node.
    pub fn get_last(&self, node_ptr: &NodePtr<V>) -> NodePtr<V> {
        let mut current = *node_ptr;
        while let Some(next) = self.next_of(&current) {
            current = next;
        }
        current
    }

    /// Returns the node reached after `steps` jumps over `next` links starting from `node_ptr`;
    /// None if the chain ends before.
    ///
    /// Zero `steps` returns `node_ptr` itself as long as it is an active node of this storage.
    pub fn get_next_at(&self, node_ptr: &NodePtr<V>, steps: usize) -> Option<NodePtr<V>> {
        let mut current = Some(*node_ptr).filter(|x| self.is_active(x))?;
        for _ in 0..steps {
            current = self.next_of(&current)?;
        }
        Some(current)
    }

    /// Returns an iterator over the pointers of nodes starting from `node_ptr` following `next` links.
    pub fn iter_ptr_from(&self, node_ptr: &NodePtr<V>) -> NodePtrIter<'_, V, P> {
        NodePtrIter::forward(self, Some(*node_ptr))
    }

    /// Returns an iterator over the values of nodes starting from `node_ptr` following `next` links.
    pub fn iter_from(&self, node_ptr: &NodePtr<V>) -> ValueIter<'_, V, P> {
        ValueIter::new(self.iter_ptr_from(node_ptr))
    }

    /// Returns the number of nodes of the chain starting from `node_ptr`.
    ///
    /// Chains do not store their lengths; this is computed by walking to the end.
    pub fn len_from(&self, node_ptr: &NodePtr<V>) -> usize {
        self.iter_ptr_from(node_ptr).count()
    }

    /// Returns a view of the chain starting at `head`, which is empty if `head` is None.
    pub fn chain(&self, head: Option<NodePtr<V>>) -> Chain<'_, V, P> {
        Chain::new(self, head)
    }

    /// Returns a view of the chain starting at `node_ptr`.
    pub fn chain_from(&self, node_ptr: &NodePtr<V>) -> Chain<'_, V, P> {
        Chain::new(self, Some(*node_ptr))
    }

    // format

    /// Returns the string representation of the chain starting at `node_ptr`, such as
    /// `[1 > 2 > 3]` for singly and `[1 <> 2 <> 3]` for doubly linked nodes.
    pub fn format(&self, node_ptr: &NodePtr<V>) -> String
    where
        V::Item: Display,
    {
        self.chain_from(node_ptr).to_string()
    }

    /// Returns the string representation of the chain starting at `node_ptr` using the
    /// given `symbols` and the `Display` implementation of the values.
    pub fn format_with_symbols(&self, node_ptr: &NodePtr<V>, symbols: &FormatSymbols) -> String
    where
        V::Item: Display,
    {
        self.chain_from(node_ptr)
            .format_with(symbols, |x| x.to_string())
    }

    /// Returns the string representation of the chain starting at `node_ptr` using the
    /// given `symbols`, where each value is converted to a string by `convert`.
    pub fn format_custom<F, S>(
        &self,
        node_ptr: &NodePtr<V>,
        symbols: &FormatSymbols,
        convert: F,
    ) -> String
    where
        F: FnMut(&V::Item) -> S,
        S: AsRef<str>,
    {
        self.chain_from(node_ptr).format_with(symbols, convert)
    }

    // mut

    /// Returns a mutable reference to the node with the given `node_ptr`;
    /// None if the node does not belong to this storage.
    pub fn get_node_mut(&mut self, node_ptr: &NodePtr<V>) -> Option<&mut Node<V>> {
        self.nodes
            .index_of_ptr(node_ptr.ptr())
            .and_then(|position| self.nodes.get_mut(position))
    }

    /// Returns a mutable reference to the node with the given `node_ptr`.
    ///
    /// # Panics
    ///
    /// Panics if the node does not belong to this storage.
    pub fn node_mut(&mut self, node_ptr: &NodePtr<V>) -> &mut Node<V> {
        self.get_node_mut(node_ptr)
            .expect("Pointer does not belong to the collection")
    }

    /// Returns a mutable reference to the value of the node with the given `node_ptr`;
    /// None if the node does not belong to this storage or is closed.
    pub fn value_mut(&mut self, node_ptr: &NodePtr<V>) -> Option<&mut V::Item> {
        self.get_node_mut(node_ptr).and_then(|x| x.value_mut())
    }

    /// Pushes a node with the given `value` and no connections, and returns its pointer.
    ///
    /// The node takes the position of a released node if there is any; see [`release`].
    ///
    /// [`release`]: LinkedNodes::release
    ///
    /// # Panics
    ///
    /// Panics if the underlying storage is a fixed capacity storage which is full.
    pub fn push(&mut self, value: V::Item) -> NodePtr<V> {
        self.push_node(Node::new_free_node(value))
    }

    pub(crate) fn push_node(&mut self, node: Node<V>) -> NodePtr<V> {
        self.len += 1;
        if let Some(position) = self.next_vacant_position() {
            if let Some(slot) = self.nodes.get_mut(position) {
                *slot = node;
                return NodePtr::new(slot as *const Node<V>);
            }
        }

        NodePtr::new(self.nodes.push_get_ptr(node) as *const Node<V>)
    }

    fn next_vacant_position(&mut self) -> Option<usize> {
        if self.vacant.is_empty() {
            return None;
        }

        if self.links_to_closed {
            self.detach_links_to_closed_nodes();
            self.links_to_closed = false;
            self.state = self.state.successor_state();
        }

        self.vacant.pop()
    }

    /// Clears every `next` and `prev` link of active nodes which points to a closed node,
    /// so that a reused position never becomes reachable through a stale link.
    fn detach_links_to_closed_nodes(&mut self) {
        for position in 0..self.nodes.len() {
            let Some(node) = self.nodes.get(position).filter(|x| x.is_active()) else {
                continue;
            };
            let next = node.next().get().is_some_and(|x| self.is_closed(&x));
            let prev = node.prev().back().is_some_and(|x| self.is_closed(&x));

            if let Some(node) = self.nodes.get_mut(position).filter(|_| next || prev) {
                if next {
                    node.next_mut().set_none();
                }
                if prev {
                    node.prev_mut().clear();
                }
            }
        }
    }

    /// Releases the node at `node_ptr` together with all nodes reachable from it by following
    /// `next` links; returns the number of released nodes.
    ///
    /// Values of released nodes are dropped and the nodes are closed. `prev` links are never
    /// followed; hence, nodes before `node_ptr` stay alive. If the predecessor of a doubly linked
    /// node links forward to it, that link is cleared so that the remaining chain ends there.
    ///
    /// Positions of released nodes are reused by later pushes; a [`NodePtr`] to a released node
    /// might then resolve to an unrelated node. Links held by the nodes of the storage are taken
    /// care of, while handles held elsewhere can be checked with a [`NodeIdx`], which detects
    /// the reuse through the memory state.
    ///
    /// Releasing a closed node or a node of another storage does nothing and returns zero.
    pub fn release(&mut self, node_ptr: &NodePtr<V>) -> usize {
        if let Some(prev) = self.back_of(node_ptr) {
            if let Some(prev) = self
                .get_node_mut(&prev)
                .filter(|x| x.next().points_to(node_ptr))
            {
                prev.next_mut().set_none();
            }
        }

        let mut num_released = 0;
        let mut current = Some(*node_ptr);
        while let Some(ptr) = current {
            let Some(position) = self.nodes.index_of_ptr(ptr.ptr()) else {
                break;
            };
            let Some(node) = self.nodes.get_mut(position) else {
                break;
            };
            current = node.next().get();
            match node.close() {
                Some(_) => {
                    num_released += 1;
                    self.vacant.push(position);
                }
                None => break,
            }
        }

        self.links_to_closed |= num_released > 0;
        self.len -= num_released;
        num_released
    }

    /// Clears the storage: drops all nodes of all chains.
    ///
    /// The memory state of the storage is changed; node indices created before
    /// clearing become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.vacant.clear();
        self.links_to_closed = false;
        self.len = 0;
        self.state = self.state.successor_state();
    }
}
