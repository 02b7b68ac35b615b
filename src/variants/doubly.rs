use crate::{
    Chain, LinkedNodes, Node, NodePtr, RefsSingle, Variant, format::DEFAULT_SEP_DOUBLY,
    iter::{NodePtrIter, ValueIter},
};
use core::marker::PhantomData;
use orx_pinned_vec::PinnedVec;

/// Doubly linked nodes, each holding a value, an optional `next` and an optional `prev` link.
pub struct Doubly<T>(PhantomData<T>);

impl<T> Variant for Doubly<T> {
    type Item = T;

    type Prev = RefsSingle<Self>;

    const DEFAULT_SEPARATOR: &'static str = DEFAULT_SEP_DOUBLY;
}

/// A node of a doubly linked list.
pub type DoubleLinkNode<T> = Node<Doubly<T>>;

impl<T, P> LinkedNodes<Doubly<T>, P>
where
    P: PinnedVec<Node<Doubly<T>>>,
{
    /// Pushes a node with the given `value` and links to `prev` and `next`, and returns its pointer.
    ///
    /// Links of the neighbors are not updated and no validation is performed; keeping
    /// the chain consistent is up to the caller.
    pub fn new_node(
        &mut self,
        prev: Option<NodePtr<Doubly<T>>>,
        next: Option<NodePtr<Doubly<T>>>,
        value: T,
    ) -> NodePtr<Doubly<T>> {
        let node = Node::new_active(value, RefsSingle::new(prev), RefsSingle::new(next));
        self.push_node(node)
    }

    /// Pushes a node with the default value and no connections, and returns its pointer.
    pub fn new_empty_node(&mut self) -> NodePtr<Doubly<T>>
    where
        T: Default,
    {
        self.push(T::default())
    }

    /// Creates a connected chain of nodes from the given `values` and returns its head;
    /// None if `values` is empty.
    ///
    /// Every node of the created chain links back to its predecessor, and the head
    /// does not have a predecessor.
    ///
    /// ```
    /// use orx_linked_nodes::*;
    ///
    /// let mut nodes = LinkedNodes::<Doubly<u32>>::new();
    /// let head = nodes.build_list([1, 2, 3]).unwrap();
    ///
    /// assert_eq!(nodes.format(&head), "[1 <> 2 <> 3]");
    /// assert!(nodes.is_valid(&head));
    /// ```
    pub fn build_list<I>(&mut self, values: I) -> Option<NodePtr<Doubly<T>>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut head = None;
        let mut tail: Option<NodePtr<Doubly<T>>> = None;

        for value in values {
            let ptr = self.new_node(tail, None, value);
            let tail_node = match tail {
                Some(tail) => self.get_node_mut(&tail),
                None => None,
            };
            match tail_node {
                Some(tail_node) => tail_node.next_mut().set_some(ptr),
                None => head = Some(ptr),
            }
            tail = Some(ptr);
        }

        debug_assert!(head.is_none_or(|x| self.node(&x).prev().get().is_none()));
        head
    }

    /// Creates a new storage holding a single chain built from `values`; returns the
    /// storage together with the head of the chain.
    pub fn from_values<I>(values: I) -> (Self, Option<NodePtr<Doubly<T>>>)
    where
        I: IntoIterator<Item = T>,
        P: Default,
    {
        let mut nodes = Self::new();
        let head = nodes.build_list(values);
        (nodes, head)
    }

    /// Returns the node preceding the node at `node_ptr`; None if it is the head of its chain.
    pub fn prev_of(&self, node_ptr: &NodePtr<Doubly<T>>) -> Option<NodePtr<Doubly<T>>> {
        self.back_of(node_ptr)
    }

    /// Returns the head of the chain that `node_ptr` belongs to; i.e., the node
    /// reached by following `prev` links until there is none.
    ///
    /// Returns `node_ptr` itself if it is the head.
    pub fn get_head(&self, node_ptr: &NodePtr<Doubly<T>>) -> NodePtr<Doubly<T>> {
        let mut current = *node_ptr;
        while let Some(prev) = self.prev_of(&current) {
            current = prev;
        }
        current
    }

    /// Returns the node reached after `steps` jumps over `prev` links starting from `node_ptr`;
    /// None if the chain ends before.
    ///
    /// Zero `steps` returns `node_ptr` itself as long as it is an active node of this storage.
    pub fn get_prev_at(
        &self,
        node_ptr: &NodePtr<Doubly<T>>,
        steps: usize,
    ) -> Option<NodePtr<Doubly<T>>> {
        let mut current = Some(*node_ptr).filter(|x| self.is_active(x))?;
        for _ in 0..steps {
            current = self.prev_of(&current)?;
        }
        Some(current)
    }

    /// Returns an iterator over the pointers of nodes starting from `node_ptr` following `prev` links.
    pub fn iter_ptr_back_from(
        &self,
        node_ptr: &NodePtr<Doubly<T>>,
    ) -> NodePtrIter<'_, Doubly<T>, P> {
        NodePtrIter::backward(self, Some(*node_ptr))
    }

    /// Returns an iterator over the values of nodes starting from `node_ptr` following `prev` links.
    pub fn iter_back_from(&self, node_ptr: &NodePtr<Doubly<T>>) -> ValueIter<'_, Doubly<T>, P> {
        ValueIter::new(self.iter_ptr_back_from(node_ptr))
    }

    /// Returns true if, walking forward from `node_ptr` to the end of the chain, every
    /// `next` node links back to its predecessor.
    ///
    /// ```
    /// use orx_linked_nodes::*;
    ///
    /// let mut nodes = LinkedNodes::<Doubly<char>>::new();
    /// let head = nodes.build_list(['a', 'b', 'c']).unwrap();
    /// assert!(nodes.is_valid(&head));
    ///
    /// let c = nodes.get_next_at(&head, 2).unwrap();
    /// nodes.node_mut(&c).prev_mut().set_none();
    /// assert!(!nodes.is_valid(&head));
    /// ```
    pub fn is_valid(&self, node_ptr: &NodePtr<Doubly<T>>) -> bool {
        self.first_broken_link(node_ptr).is_none()
    }

    /// Returns the first node, walking forward from `node_ptr`, whose `next` node does
    /// not link back to it; None if the chain is valid.
    pub fn first_broken_link(
        &self,
        node_ptr: &NodePtr<Doubly<T>>,
    ) -> Option<NodePtr<Doubly<T>>> {
        self.chain_from(node_ptr).first_broken_link()
    }
}

impl<T, P> Chain<'_, Doubly<T>, P>
where
    P: PinnedVec<Node<Doubly<T>>>,
{
    /// Returns true if every `next` node of the chain links back to its predecessor.
    ///
    /// An empty chain is valid.
    pub fn is_valid(&self) -> bool {
        self.first_broken_link().is_none()
    }
}
