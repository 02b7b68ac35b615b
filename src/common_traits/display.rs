use crate::{
    Chain, Node, Variant,
    format::{FormatSymbols, write_values},
};
use core::fmt::Display;
use orx_pinned_vec::PinnedVec;

/// Writes the chain with the default symbols of its link kind, such as
/// `[1 > 2 > 3]` for singly and `[1 <> 2 <> 3]` for doubly linked nodes.
impl<V, P> Display for Chain<'_, V, P>
where
    V: Variant,
    V::Item: Display,
    P: PinnedVec<Node<V>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let symbols = FormatSymbols::of_variant::<V>();
        write_values(f, self.iter(), &symbols, |f, x| x.fmt(f))
    }
}
