use crate::Variant;
use alloc::string::String;

/// Default symbol at the start of the list.
pub const DEFAULT_START: &str = "[";

/// Default symbol at the end of the list.
pub const DEFAULT_END: &str = "]";

/// Default symbol between two adjacent elements of a singly linked list.
pub const DEFAULT_SEP_SINGLY: &str = " > ";

/// Default symbol between two adjacent elements of a doubly linked list.
pub const DEFAULT_SEP_DOUBLY: &str = " <> ";

/// Symbols used while converting a chain of nodes to a string.
///
/// ```
/// use orx_linked_nodes::*;
///
/// let symbols = FormatSymbols::singly().with_start("(").with_sep(", ").with_end(")");
/// assert_eq!(symbols.sep, ", ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatSymbols {
    /// Symbol at the start of the list.
    pub start: String,
    /// Symbol between two adjacent elements.
    pub sep: String,
    /// Symbol at the end of the list.
    pub end: String,
}

impl FormatSymbols {
    /// Creates format symbols with the given `start`, `sep` and `end`.
    pub fn new(start: impl Into<String>, sep: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            sep: sep.into(),
            end: end.into(),
        }
    }

    /// Default symbols of singly linked lists: `[1 > 2 > 3]`.
    pub fn singly() -> Self {
        Self::new(DEFAULT_START, DEFAULT_SEP_SINGLY, DEFAULT_END)
    }

    /// Default symbols of doubly linked lists: `[1 <> 2 <> 3]`.
    pub fn doubly() -> Self {
        Self::new(DEFAULT_START, DEFAULT_SEP_DOUBLY, DEFAULT_END)
    }

    /// Default symbols of the link kind `V`.
    pub fn of_variant<V: Variant>() -> Self {
        Self::new(DEFAULT_START, V::DEFAULT_SEPARATOR, DEFAULT_END)
    }

    /// Replaces the start symbol.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = start.into();
        self
    }

    /// Replaces the separator symbol.
    pub fn with_sep(mut self, sep: impl Into<String>) -> Self {
        self.sep = sep.into();
        self
    }

    /// Replaces the end symbol.
    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = end.into();
        self
    }
}
