use crate::{
    LinkedNodes, Node, NodePtr, RefsNone, RefsSingle, Variant, format::DEFAULT_SEP_SINGLY,
};
use core::marker::PhantomData;
use orx_pinned_vec::PinnedVec;

/// Singly linked nodes, each holding a value and an optional `next` link.
pub struct Singly<T>(PhantomData<T>);

impl<T> Variant for Singly<T> {
    type Item = T;

    type Prev = RefsNone;

    const DEFAULT_SEPARATOR: &'static str = DEFAULT_SEP_SINGLY;
}

/// A node of a singly linked list.
pub type SingleLinkNode<T> = Node<Singly<T>>;

impl<T, P> LinkedNodes<Singly<T>, P>
where
    P: PinnedVec<Node<Singly<T>>>,
{
    /// Pushes a node with the given `value` linking to `next`, and returns its pointer.
    pub fn new_node(
        &mut self,
        next: Option<NodePtr<Singly<T>>>,
        value: T,
    ) -> NodePtr<Singly<T>> {
        self.push_node(Node::new_active(value, RefsNone, RefsSingle::new(next)))
    }

    /// Pushes a node with the default value and no connections, and returns its pointer.
    pub fn new_empty_node(&mut self) -> NodePtr<Singly<T>>
    where
        T: Default,
    {
        self.push(T::default())
    }

    /// Creates a connected chain of nodes from the given `values` and returns its head;
    /// None if `values` is empty.
    ///
    /// ```
    /// use orx_linked_nodes::*;
    ///
    /// let mut nodes = LinkedNodes::<Singly<u32>>::new();
    /// let head = nodes.build_list([1, 2, 3]).unwrap();
    ///
    /// assert_eq!(nodes.format(&head), "[1 > 2 > 3]");
    /// ```
    pub fn build_list<I>(&mut self, values: I) -> Option<NodePtr<Singly<T>>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut head = None;
        let mut tail: Option<NodePtr<Singly<T>>> = None;

        for value in values {
            let ptr = self.push(value);
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

        head
    }

    /// Creates a new storage holding a single chain built from `values`; returns the
    /// storage together with the head of the chain.
    pub fn from_values<I>(values: I) -> (Self, Option<NodePtr<Singly<T>>>)
    where
        I: IntoIterator<Item = T>,
        P: Default,
    {
        let mut nodes = Self::new();
        let head = nodes.build_list(values);
        (nodes, head)
    }
}
