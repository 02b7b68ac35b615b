use crate::{Chain, LinkedNodes, Node, Variant};
use core::fmt::Debug;
use orx_pinned_vec::PinnedVec;

impl<V, P> Debug for LinkedNodes<V, P>
where
    V: Variant,
    V::Item: Debug,
    P: PinnedVec<Node<V>> + Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinkedNodes")
            .field("len", &self.len())
            .field("storage_len", &self.nodes().len())
            .field("memory_state", &self.memory_state())
            .field("nodes", self.nodes())
            .finish()
    }
}

impl<V, P> Debug for Chain<'_, V, P>
where
    V: Variant,
    V::Item: Debug,
    P: PinnedVec<Node<V>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
