use crate::{LinkedNodes, Node, NodePtr, Variant};
use core::iter::FusedIterator;
use orx_pinned_vec::PinnedVec;

type Step<V, P> = fn(&LinkedNodes<V, P>, &NodePtr<V>) -> Option<NodePtr<V>>;

/// Iterator over the pointers of a chain of nodes, moving either forward over
/// `next` links or backward over `prev` links.
pub struct NodePtrIter<'a, V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    nodes: &'a LinkedNodes<V, P>,
    current: Option<NodePtr<V>>,
    step: Step<V, P>,
}

impl<'a, V, P> NodePtrIter<'a, V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    fn new(nodes: &'a LinkedNodes<V, P>, start: Option<NodePtr<V>>, step: Step<V, P>) -> Self {
        let current = start.filter(|x| nodes.is_active(x));
        Self {
            nodes,
            current,
            step,
        }
    }

    pub(crate) fn forward(nodes: &'a LinkedNodes<V, P>, start: Option<NodePtr<V>>) -> Self {
        Self::new(nodes, start, LinkedNodes::next_of)
    }

    pub(crate) fn backward(nodes: &'a LinkedNodes<V, P>, start: Option<NodePtr<V>>) -> Self {
        Self::new(nodes, start, LinkedNodes::back_of)
    }
}

impl<V, P> Clone for NodePtrIter<'_, V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            step: self.step,
        }
    }
}

impl<V, P> Iterator for NodePtrIter<'_, V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    type Item = NodePtr<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = (self.step)(self.nodes, &current);
        Some(current)
    }
}

impl<V, P> FusedIterator for NodePtrIter<'_, V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
}

/// Iterator over the values of a chain of nodes.
pub struct ValueIter<'a, V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    ptrs: NodePtrIter<'a, V, P>,
}

impl<'a, V, P> ValueIter<'a, V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    pub(crate) fn new(ptrs: NodePtrIter<'a, V, P>) -> Self {
        Self { ptrs }
    }
}

impl<V, P> Clone for ValueIter<'_, V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    fn clone(&self) -> Self {
        Self {
            ptrs: self.ptrs.clone(),
        }
    }
}

impl<'a, V, P> Iterator for ValueIter<'a, V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
    type Item = &'a V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.ptrs.nodes;
        self.ptrs.next().and_then(|ptr| nodes.value(&ptr))
    }
}

impl<V, P> FusedIterator for ValueIter<'_, V, P>
where
    V: Variant,
    P: PinnedVec<Node<V>>,
{
}
