//! Page identifiers and reference strings.
//!
//! A reference string is the ordered list of page accesses a simulation
//! replays. It is immutable once built and always holds between
//! [`MIN_REFERENCE_LEN`](crate::config::MIN_REFERENCE_LEN) and
//! [`MAX_REFERENCE_LEN`](crate::config::MAX_REFERENCE_LEN) pages.

pub mod generator;

use std::fmt;
use std::str::FromStr;

use crate::config::validate_reference_len;
use crate::error::{Result, SimulationError};

pub use generator::ReferenceGenerator;

/// Identifier of a virtual page.
pub type Page = u32;

/// An ordered, non-empty sequence of page accesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceString {
    pages: Vec<Page>,
}

impl ReferenceString {
    /// Builds a reference string, rejecting empty or oversized input.
    pub fn new(pages: Vec<Page>) -> Result<Self> {
        validate_reference_len(pages.len())?;
        Ok(Self { pages })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false for a constructed reference string.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Page> {
        self.pages.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Page] {
        &self.pages
    }

    pub fn iter(&self) -> impl Iterator<Item = Page> + '_ {
        self.pages.iter().copied()
    }

    /// The accesses strictly after `index`.
    pub fn suffix_after(&self, index: usize) -> &[Page] {
        let start = index.saturating_add(1).min(self.pages.len());
        &self.pages[start..]
    }
}

impl fmt::Display for ReferenceString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", page)?;
        }
        Ok(())
    }
}

/// Parses pages separated by commas and/or whitespace, e.g. `"1,2 3"`.
impl FromStr for ReferenceString {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self> {
        let pages = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<Page>().map_err(|_| SimulationError::InvalidPage {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_REFERENCE_LEN;

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            ReferenceString::new(vec![]),
            Err(SimulationError::InvalidSequenceLength { length: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_oversized() {
        let pages = vec![0; MAX_REFERENCE_LEN + 1];
        assert!(matches!(
            ReferenceString::new(pages),
            Err(SimulationError::InvalidSequenceLength { length: 51, .. })
        ));
    }

    #[test]
    fn test_suffix_after() {
        let reference = ReferenceString::new(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(reference.suffix_after(0), &[2, 3, 4]);
        assert_eq!(reference.suffix_after(2), &[4]);
        assert!(reference.suffix_after(3).is_empty());
        assert!(reference.suffix_after(10).is_empty());
    }

    #[test]
    fn test_parse() {
        let reference: ReferenceString = "1,2 3,  4".parse().unwrap();
        assert_eq!(reference.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(reference.to_string(), "1 2 3 4");
    }

    #[test]
    fn test_parse_invalid_token() {
        let err = "1,x,3".parse::<ReferenceString>().unwrap_err();
        assert_eq!(
            err,
            SimulationError::InvalidPage {
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            " , ".parse::<ReferenceString>(),
            Err(SimulationError::InvalidSequenceLength { length: 0, .. })
        ));
    }
}
