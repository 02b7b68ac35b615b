#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]
#![no_std]
extern crate alloc;

/// Node references.
pub mod references;

mod chain;
mod common_traits;
mod format;
mod iter;
mod linked_nodes;
mod memory;
mod node;
mod variant;
mod variants;

pub use chain::Chain;
pub use format::{
    DEFAULT_END, DEFAULT_SEP_DOUBLY, DEFAULT_SEP_SINGLY, DEFAULT_START, FormatSymbols,
};
pub use iter::{NodePtrIter, ValueIter};
pub use linked_nodes::{FixedLinkedNodes, LinkedNodes};
pub use memory::{MemoryState, Utilization};
pub use node::Node;
pub use references::{BackRef, NodeIdx, NodeIdxError, NodePtr, Refs, RefsNone, RefsSingle};
pub use variant::Variant;
pub use variants::{DoubleLinkNode, Doubly, SingleLinkNode, Singly};
