/// Snapshot of how the positions of a [`LinkedNodes`] storage are used.
///
/// Released nodes stay in place as closed nodes until their positions are taken by
/// newly pushed nodes. Hence, `num_active_nodes + num_closed_nodes` is the number of
/// positions in use, which never exceeds `capacity`.
///
/// [`LinkedNodes`]: crate::LinkedNodes
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Utilization {
    /// Number of positions allocated by the storage.
    pub capacity: usize,
    /// Number of nodes belonging to a chain.
    pub num_active_nodes: usize,
    /// Number of released nodes.
    pub num_closed_nodes: usize,
}
