use core::fmt::{Debug, Display};

/// Error cases of an invalid node index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeIdxError {
    /// RemovedNode => Referenced node is released from its chain.
    /// Node index can only be used if the corresponding node is still active.
    RemovedNode,
    /// OutOfBounds => Node index does not point to the current nodes of the collection;
    /// i.e., the index is being used to access a collection which is different than which
    /// it was created for.
    OutOfBounds,
    /// ReorganizedCollection => Memory positions of the collection might have been re-used
    /// by new nodes after the index was created. This happens:
    /// * when the collection is cleared,
    /// * when a node is pushed to the position of a released node.
    ReorganizedCollection,
}

impl Display for NodeIdxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        <NodeIdxError as Debug>::fmt(self, f)
    }
}

impl core::error::Error for NodeIdxError {}
