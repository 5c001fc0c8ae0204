//! Random reference string generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Page, ReferenceString};
use crate::config::{validate_reference_len, MAX_PAGE_ID};
use crate::error::Result;

/// Produces reference strings with pages drawn uniformly from `0..=9`.
#[derive(Debug)]
pub struct ReferenceGenerator {
    rng: StdRng,
}

impl ReferenceGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator that yields the same sequence for the same seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a reference string of `length` pages.
    pub fn generate(&mut self, length: usize) -> Result<ReferenceString> {
        validate_reference_len(length)?;
        let pages: Vec<Page> = (0..length)
            .map(|_| self.rng.gen_range(0..=MAX_PAGE_ID))
            .collect();
        ReferenceString::new(pages)
    }
}

impl Default for ReferenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}
