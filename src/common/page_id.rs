//! Page identifier type.

use std::fmt;

/// Identifies a virtual page in a reference string.
///
/// Unsigned by construction, so negative page numbers cannot reach an engine.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }

    /// Page holding `address` when each page spans `instructions_per_page`.
    ///
    /// Callers must pass a non-zero page size.
    #[inline]
    pub fn containing(address: u32, instructions_per_page: u32) -> Self {
        PageId(address / instructions_per_page)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
