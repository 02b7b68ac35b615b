/// Memory state of a collection of linked nodes.
///
/// The state changes when memory positions of earlier nodes might be re-used by new
/// nodes; i.e., when the collection is cleared, and when it starts re-using positions
/// of released nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct MemoryState {
    pub(crate) id: usize,
}

impl MemoryState {
    pub(crate) const fn successor_state(&self) -> Self {
        Self { id: self.id + 1 }
    }
}
