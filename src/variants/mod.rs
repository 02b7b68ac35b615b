mod doubly;
mod singly;

pub use doubly::{DoubleLinkNode, Doubly};
pub use singly::{SingleLinkNode, Singly};
