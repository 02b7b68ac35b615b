use crate::{Chain, Node, Variant};
use orx_pinned_vec::PinnedVec;

/// Two chains are equal if they hold equal values in the same order and,
/// for doubly linked nodes, both have consistent back links.
impl<V, P, Q> PartialEq<Chain<'_, V, Q>> for Chain<'_, V, P>
where
    V: Variant,
    V::Item: PartialEq,
    P: PinnedVec<Node<V>>,
    Q: PinnedVec<Node<V>>,
{
    fn eq(&self, other: &Chain<'_, V, Q>) -> bool {
        self.equals_by(other, |a, b| a == b)
    }
}
