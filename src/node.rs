use crate::{Refs, RefsSingle, Variant};
use core::fmt::Debug;

/// Node of a singly or doubly linked list.
///
/// * `Node<Singly<T>>` has a value and an optional `next` link.
/// * `Node<Doubly<T>>` additionally has an optional `prev` link.
///
/// Links are plain [`NodePtr`] handles which can be freely read and overwritten;
/// nothing prevents a caller from building an inconsistent doubly linked chain.
///
/// [`NodePtr`]: crate::NodePtr
pub struct Node<V>
where
    V: Variant,
{
    value: Option<V::Item>,
    prev: V::Prev,
    next: RefsSingle<V>,
}

unsafe impl<V: Variant> Send for Node<V> where V::Item: Send {}

unsafe impl<V: Variant> Sync for Node<V> where V::Item: Sync {}

impl<V> Node<V>
where
    V: Variant,
{
    /// Creates a new active node with the given `value`, and `prev` and `next` references.
    pub fn new_active(value: V::Item, prev: V::Prev, next: RefsSingle<V>) -> Self {
        Self {
            value: Some(value),
            prev,
            next,
        }
    }

    /// Creates a new active node with the given `value` but with no connections.
    pub fn new_free_node(value: V::Item) -> Self {
        Self {
            value: Some(value),
            prev: Refs::empty(),
            next: Refs::empty(),
        }
    }

    // consuming

    /// Takes and returns the value of the node; None if the node is closed.
    pub fn into_value(self) -> Option<V::Item> {
        self.value
    }

    // ref

    /// Returns a reference to the value of the node; None if the node is already closed.
    pub fn value(&self) -> Option<&V::Item> {
        self.value.as_ref()
    }

    /// Returns a reference to the previous reference.
    pub fn prev(&self) -> &V::Prev {
        &self.prev
    }

    /// Returns a reference to the next reference.
    pub fn next(&self) -> &RefsSingle<V> {
        &self.next
    }

    /// Returns true if the node is active, false if it is closed.
    #[inline(always)]
    pub fn is_active(&self) -> bool {
        self.value.is_some()
    }

    /// Returns true if the node is closed, false if it is active.
    #[inline(always)]
    pub fn is_closed(&self) -> bool {
        self.value.is_none()
    }

    // mut

    /// Returns a mutable reference to the underlying value.
    pub fn value_mut(&mut self) -> Option<&mut V::Item> {
        self.value.as_mut()
    }

    /// Returns a mutable reference to the previous reference.
    pub fn prev_mut(&mut self) -> &mut V::Prev {
        &mut self.prev
    }

    /// Returns a mutable reference to the next reference.
    pub fn next_mut(&mut self) -> &mut RefsSingle<V> {
        &mut self.next
    }

    /// Replaces the value of the node with the `new_value` and returns the old value.
    ///
    /// Returns None if the node is closed, in which case `new_value` is dropped
    /// and the node stays closed.
    pub fn swap_value(&mut self, new_value: V::Item) -> Option<V::Item> {
        self.value
            .as_mut()
            .map(|value| core::mem::replace(value, new_value))
    }

    /// Closes the node: clears its connections and returns its value.
    ///
    /// Returns None if the node was already closed.
    pub(crate) fn close(&mut self) -> Option<V::Item> {
        self.prev.clear();
        self.next.clear();
        self.value.take()
    }
}

impl<V: Variant> Debug for Node<V>
where
    V::Item: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .finish()
    }
}
