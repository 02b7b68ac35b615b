use crate::{
    LinkedNodes, Node, NodePtr, Variant,
    format::{FormatSymbols, write_values},
    iter::{NodePtrIter, ValueIter},
    references::BackRef,
};
use alloc::string::String;
use core::fmt::Write;
use orx_pinned_vec::PinnedVec;

/// A read-only view of a chain of nodes: the storage owning the nodes together with
/// an optional head.
///
/// A chain without a head, or with a head which is not an active node of the storage,
/// is an empty chain.
pub struct Chain<'a, V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    nodes: &'a LinkedNodes<V, P>,
    head: Option<NodePtr<V>>,
}

impl<V, P> Clone for Chain<'_, V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, P> Copy for Chain<'_, V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
}

impl<'a, V, P> Chain<'a, V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    pub(crate) fn new(nodes: &'a LinkedNodes<V, P>, head: Option<NodePtr<V>>) -> Self {
        let head = head.filter(|x| nodes.is_active(x));
        Self { nodes, head }
    }

    /// Returns the storage that the nodes of the chain belong to.
    pub fn nodes(&self) -> &'a LinkedNodes<V, P> {
        self.nodes
    }

    /// Returns the head of the chain; None if the chain is empty.
    pub fn head(&self) -> Option<NodePtr<V>> {
        self.head
    }

    /// Returns the last node of the chain; None if the chain is empty.
    pub fn last(&self) -> Option<NodePtr<V>> {
        self.head.map(|x| self.nodes.get_last(&x))
    }

    /// Returns true if the chain does not have any nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of nodes of the chain, computed by walking to its end.
    pub fn len(&self) -> usize {
        self.iter_ptr().count()
    }

    /// Returns an iterator over the pointers of the nodes of the chain.
    pub fn iter_ptr(&self) -> NodePtrIter<'a, V, P> {
        NodePtrIter::forward(self.nodes, self.head)
    }

    /// Returns an iterator over the values of the nodes of the chain.
    pub fn iter(&self) -> ValueIter<'a, V, P> {
        ValueIter::new(self.iter_ptr())
    }

    /// Returns true if this and the `other` chain are structurally equal:
    ///
    /// * both chains are empty, or
    /// * both have the same length, `eq` returns true for every pair of values at the same
    ///   position, and, for doubly linked nodes, every `next` node links back to its
    ///   predecessor on both sides.
    ///
    /// The walk stops at the first pair of values that `eq` rejects or at the first
    /// inconsistent back link, whichever comes first.
    pub fn equals_by<Q, E>(&self, other: &Chain<'_, V, Q>, mut eq: E) -> bool
    where
        Q: PinnedVec<Node<V>>,
        E: FnMut(&V::Item, &V::Item) -> bool,
    {
        let (mut a, mut b) = match (self.head, other.head) {
            (None, None) => return true,
            (Some(a), Some(b)) => (a, b),
            _ => return false,
        };

        loop {
            let (Some(value_a), Some(value_b)) = (self.nodes.value(&a), other.nodes.value(&b))
            else {
                return false;
            };

            if !eq(value_a, value_b) {
                return false;
            }

            match (self.nodes.next_of(&a), other.nodes.next_of(&b)) {
                (None, None) => return true,
                (Some(next_a), Some(next_b)) => {
                    let consistent = links_back(self.nodes, &next_a, &a)
                        && links_back(other.nodes, &next_b, &b);
                    if !consistent {
                        return false;
                    }
                    (a, b) = (next_a, next_b);
                }
                _ => return false,
            }
        }
    }

    /// Returns the string representation of the chain using the given `symbols`,
    /// where each value is converted to a string by `convert`.
    ///
    /// An empty chain is represented as `symbols.start` followed by `symbols.end`.
    pub fn format_with<F, S>(&self, symbols: &FormatSymbols, mut convert: F) -> String
    where
        F: FnMut(&V::Item) -> S,
        S: AsRef<str>,
    {
        let mut str = String::new();
        // writing into a string never fails
        _ = write_values(&mut str, self.iter(), symbols, |w, x| {
            w.write_str(convert(x).as_ref())
        });
        str
    }

    pub(crate) fn first_broken_link(&self) -> Option<NodePtr<V>> {
        let mut current = self.head?;
        while let Some(next) = self.nodes.next_of(&current) {
            if !links_back(self.nodes, &next, &current) {
                return Some(current);
            }
            current = next;
        }
        None
    }
}

fn links_back<V, P>(nodes: &LinkedNodes<V, P>, node: &NodePtr<V>, prev: &NodePtr<V>) -> bool
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    nodes
        .get_node(node)
        .is_some_and(|x| x.prev().links_back_to(prev))
}

impl<'a, V, P> IntoIterator for &Chain<'a, V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    type Item = &'a V::Item;

    type IntoIter = ValueIter<'a, V, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
