use super::refs::{BackRef, Refs};
use crate::{NodePtr, Variant};

/// Zero-sized no-reference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefsNone;

impl Refs for RefsNone {
    #[inline(always)]
    fn empty() -> Self {
        Self
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        true
    }

    #[inline(always)]
    fn clear(&mut self) {}
}

impl<V: Variant> BackRef<V> for RefsNone {
    #[inline(always)]
    fn back(&self) -> Option<NodePtr<V>> {
        None
    }

    #[inline(always)]
    fn links_back_to(&self, _: &NodePtr<V>) -> bool {
        true
    }
}
