//! Core membership filter implementation
//!
//! INVARIANTS:
//! - The bit vector holds exactly `capacity` bits for the filter's lifetime
//! - At most [`HashAlgorithm::COUNT`] hash functions are used
//! - No false negatives: once added, `might_contain` MUST return true
//! - Bits are only ever set, never cleared

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::config::{FilterConfig, DEFAULT_CAPACITY, DEFAULT_HASH_COUNT};
use super::hash_functions::{compute_hash_positions, HashAlgorithm};
use super::parameters::calculate_fpr;
#[cfg(doc)]
use super::parameters::MAX_CAPACITY;
use crate::error::FilterError;

/// Bloom filter for probabilistic string membership testing
///
/// Each item is hashed with the first `hash_count` algorithms of
/// [`HashAlgorithm::ALL`]; every digest selects one bit. False positives are
/// possible, false negatives are not.
///
/// # Example
///
/// ```
/// use membership_filter::MembershipFilter;
///
/// let mut filter = MembershipFilter::new(50, 3)?;
/// filter.add("1984");
///
/// assert!(filter.might_contain("1984"));
/// assert!(!filter.might_contain("Dune"));
/// # Ok::<(), membership_filter::FilterError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MembershipFilter {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Hash functions in use (k = len)
    algorithms: &'static [HashAlgorithm],
    /// Number of `add` calls (n)
    items_added: usize,
}

/// Point-in-time view of a filter's occupancy
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterStats {
    pub capacity: usize,
    pub hash_count: usize,
    pub algorithms: Vec<HashAlgorithm>,
    pub items_added: usize,
    pub bits_set: usize,
    pub fill_ratio: f64,
    /// Estimate from the insertion count: (1 - e^(-kn/m))^k
    pub estimated_fpr: f64,
    /// Estimate from the current bit occupancy: fill_ratio^k
    pub fill_based_fpr: f64,
}

impl MembershipFilter {
    /// Create a filter with `capacity` bits and `hash_count` hash functions
    ///
    /// A `hash_count` above [`HashAlgorithm::COUNT`] is clamped.
    ///
    /// # Errors
    /// [`FilterError::InvalidConfiguration`] if either argument is zero or
    /// `capacity` exceeds [`MAX_CAPACITY`].
    pub fn new(capacity: usize, hash_count: usize) -> Result<Self, FilterError> {
        Self::from_config(&FilterConfig {
            capacity,
            hash_count,
            ..Default::default()
        })
    }

    /// Create a filter from a validated configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        config.validate()?;

        let hash_count = config.effective_hash_count();
        if hash_count < config.hash_count {
            warn!(
                requested = config.hash_count,
                available = HashAlgorithm::COUNT,
                "Clamping hash_count to the number of available hash algorithms"
            );
        }

        Ok(Self::with_bits(config.capacity, hash_count))
    }

    /// `capacity` must already be within `1..=MAX_CAPACITY`
    fn with_bits(capacity: usize, hash_count: usize) -> Self {
        debug!(
            capacity = capacity,
            hash_count = hash_count,
            "Created membership filter"
        );

        Self {
            bits: bitvec![u8, Lsb0; 0; capacity],
            algorithms: HashAlgorithm::first(hash_count),
            items_added: 0,
        }
    }

    /// Bit indices for `item`, one per hash function, in algorithm order
    pub fn compute_indices(&self, item: &str) -> Vec<usize> {
        compute_hash_positions(item.as_bytes(), self.algorithms, self.capacity())
    }

    /// Insert an item into the filter
    ///
    /// After insertion, `might_contain(item)` is guaranteed to return true.
    /// Adding the same item again leaves the bits unchanged.
    pub fn add(&mut self, item: &str) {
        let positions = self.compute_indices(item);
        trace!(?positions, "Setting filter bits");
        for pos in positions {
            self.bits.set(pos, true);
        }
        self.items_added += 1;
    }

    /// Test if an item might be in the filter
    ///
    /// Returns:
    /// - `true` if the item might be in the set (could be false positive)
    /// - `false` if the item is definitely NOT in the set
    pub fn might_contain(&self, item: &str) -> bool {
        self.compute_indices(item)
            .iter()
            .all(|&pos| self.bits[pos])
    }

    /// Insert raw bytes, which must be valid UTF-8
    ///
    /// # Errors
    /// [`FilterError::InvalidInput`] if `bytes` is not UTF-8. The filter is
    /// left untouched in that case.
    pub fn add_bytes(&mut self, bytes: &[u8]) -> Result<(), FilterError> {
        let item = std::str::from_utf8(bytes)?;
        self.add(item);
        Ok(())
    }

    /// Query raw bytes, which must be valid UTF-8
    pub fn might_contain_bytes(&self, bytes: &[u8]) -> Result<bool, FilterError> {
        let item = std::str::from_utf8(bytes)?;
        Ok(self.might_contain(item))
    }

    /// Get the filter size in bits
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Get the number of hash functions
    pub fn hash_count(&self) -> usize {
        self.algorithms.len()
    }

    /// Get the hash algorithms in use
    pub fn algorithms(&self) -> &'static [HashAlgorithm] {
        self.algorithms
    }

    /// Get the number of `add` calls so far
    pub fn items_added(&self) -> usize {
        self.items_added
    }

    /// Get the underlying bits
    pub fn bits(&self) -> &BitSlice<u8, Lsb0> {
        &self.bits
    }

    /// Whether the bit at `index` is set; `None` if out of range
    pub fn is_set(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.capacity() as f64
    }

    /// Theoretical false positive rate after the insertions made so far
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn false_positive_rate(&self) -> f64 {
        calculate_fpr(self.capacity(), self.items_added, self.hash_count())
    }

    /// Snapshot the filter's occupancy
    pub fn stats(&self) -> FilterStats {
        let fill_ratio = self.fill_ratio();
        FilterStats {
            capacity: self.capacity(),
            hash_count: self.hash_count(),
            algorithms: self.algorithms.to_vec(),
            items_added: self.items_added,
            bits_set: self.bits_set(),
            fill_ratio,
            estimated_fpr: self.false_positive_rate(),
            fill_based_fpr: fill_ratio.powi(self.hash_count() as i32),
        }
    }
}

impl Default for MembershipFilter {
    fn default() -> Self {
        Self::with_bits(DEFAULT_CAPACITY, DEFAULT_HASH_COUNT)
    }
}
