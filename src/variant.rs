use crate::references::BackRef;

/// Variant defining the kind of links of a linked node.
pub trait Variant: Sized {
    /// Elements of the nodes.
    type Item;

    /// The way the previous node reference will be stored.
    /// * `RefsNone` if there is no reference; i.e., singly linked nodes.
    /// * `RefsSingle` if there is zero or one reference; i.e., doubly linked nodes.
    type Prev: BackRef<Self>;

    /// Symbol placed between two adjacent elements by the default format of the list.
    const DEFAULT_SEPARATOR: &'static str;
}
