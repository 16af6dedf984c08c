//! The page reference string consumed by every replacement engine.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::common::{Error, PageId, Result};

/// An ordered, immutable sequence of page references.
///
/// Engines only ever see the page values. Whether the sequence came from the
/// address generator or from a literal list makes no difference, and the
/// [`fingerprint`](Self::fingerprint) makes that checkable.
///
/// # Example
/// ```
/// use pagesim::ReferenceString;
///
/// let refs: ReferenceString = "1, 2, 3, 1".parse().unwrap();
/// assert_eq!(refs.len(), 4);
/// assert_eq!(refs.distinct_pages(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceString {
    pages: Vec<PageId>,
}

impl ReferenceString {
    /// Wrap an already-built page sequence.
    pub fn new(pages: Vec<PageId>) -> Self {
        Self { pages }
    }

    /// Map instruction addresses to the pages that contain them.
    ///
    /// # Errors
    /// - `Error::InvalidPageSize` if `instructions_per_page` is 0
    pub fn from_addresses(addresses: &[u32], instructions_per_page: u32) -> Result<Self> {
        if instructions_per_page == 0 {
            return Err(Error::InvalidPageSize(instructions_per_page));
        }

        let pages = addresses
            .iter()
            .map(|&addr| PageId::containing(addr, instructions_per_page))
            .collect();
        Ok(Self { pages })
    }

    /// Parse a literal list such as `"1,2,3"` or `"1 2 3"`.
    ///
    /// # Errors
    /// - `Error::InvalidPageList` for any token that is not a `u32`
    pub fn parse(input: &str) -> Result<Self> {
        input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<u32>()
                    .map(PageId::new)
                    .map_err(|_| Error::InvalidPageList(tok.to_string()))
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// Number of references (N).
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageId> {
        self.pages.iter()
    }

    /// Number of distinct pages referenced.
    pub fn distinct_pages(&self) -> usize {
        self.pages.iter().collect::<HashSet<_>>().len()
    }

    /// CRC32 over the page values, in order.
    ///
    /// Two runs report the same fingerprint exactly when they simulated the
    /// same sequence.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        for page in &self.pages {
            hasher.update(&page.0.to_le_bytes());
        }
        hasher.finalize()
    }
}

impl FromStr for ReferenceString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Vec<u32>> for ReferenceString {
    fn from(pages: Vec<u32>) -> Self {
        pages.into_iter().map(PageId::new).collect()
    }
}

impl FromIterator<PageId> for ReferenceString {
    fn from_iter<I: IntoIterator<Item = PageId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ReferenceString {
    type Item = &'a PageId;
    type IntoIter = std::slice::Iter<'a, PageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

impl fmt::Display for ReferenceString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", page.0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_addresses() {
        let refs = ReferenceString::from_addresses(&[0, 9, 10, 25, 319], 10).unwrap();
        assert_eq!(refs, ReferenceString::from(vec![0, 0, 1, 2, 31]));
    }

    #[test]
    fn test_from_addresses_rejects_zero_page_size() {
        match ReferenceString::from_addresses(&[1, 2], 0) {
            Err(Error::InvalidPageSize(0)) => {}
            other => panic!("Expected InvalidPageSize, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_separators() {
        let a: ReferenceString = "1,2,3".parse().unwrap();
        let b: ReferenceString = " 1 2\t3 ".parse().unwrap();
        let c: ReferenceString = "1, 2, 3".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            ReferenceString::parse("1,two,3"),
            Err(Error::InvalidPageList(tok)) if tok == "two"
        ));
        assert!(ReferenceString::parse("-1").is_err());
    }

    #[test]
    fn test_parse_empty() {
        let refs = ReferenceString::parse("").unwrap();
        assert!(refs.is_empty());
        assert_eq!(refs.distinct_pages(), 0);
    }

    #[test]
    fn test_distinct_pages() {
        let refs = ReferenceString::from(vec![1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
        assert_eq!(refs.distinct_pages(), 5);
    }

    #[test]
    fn test_fingerprint_depends_on_order() {
        let a = ReferenceString::from(vec![1, 2, 3]);
        let b = ReferenceString::from(vec![3, 2, 1]);
        assert_eq!(a.fingerprint(), ReferenceString::from(vec![1, 2, 3]).fingerprint());
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let refs = ReferenceString::from(vec![7, 0, 1, 2]);
        assert_eq!(refs.to_string(), "7,0,1,2");
        assert_eq!(refs.to_string().parse::<ReferenceString>().unwrap(), refs);
    }
}
