mod symbols;

pub use symbols::{
    DEFAULT_END, DEFAULT_SEP_DOUBLY, DEFAULT_SEP_SINGLY, DEFAULT_START, FormatSymbols,
};

use core::fmt::{Result, Write};

/// Writes `start`, the first value, `sep` followed by each remaining value and finally `end`.
pub(crate) fn write_values<'a, W, I, T, F>(
    w: &mut W,
    values: I,
    symbols: &FormatSymbols,
    mut write_value: F,
) -> Result
where
    W: Write,
    I: IntoIterator<Item = &'a T>,
    T: 'a,
    F: FnMut(&mut W, &T) -> Result,
{
    w.write_str(&symbols.start)?;

    let mut values = values.into_iter();
    if let Some(first) = values.next() {
        write_value(w, first)?;
        for value in values {
            w.write_str(&symbols.sep)?;
            write_value(w, value)?;
        }
    }

    w.write_str(&symbols.end)
}
